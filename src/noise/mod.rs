pub(crate) mod perlin;
