/// Human-readable record of the random choices made by the latest generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer1_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer2_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer3_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_layers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_params: Option<String>,
}

impl DebugInfo {
    /// Populated entries in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        [
            ("palette", &self.palette),
            ("background", &self.background),
            ("blendMode", &self.blend_mode),
            ("flowField", &self.flow_field),
            ("layer1Mode", &self.layer1_mode),
            ("layer2Mode", &self.layer2_mode),
            ("layer3Mode", &self.layer3_mode),
            ("activeLayers", &self.active_layers),
            ("postProcessing", &self.post_processing),
            ("postParams", &self.post_params),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k, v.clone())))
        .collect()
    }

    /// One `key: value` line per entry.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (k, v) in self.entries() {
            out.push_str(k);
            out.push_str(": ");
            out.push_str(&v);
            out.push('\n');
        }
        out
    }
}
