use crate::config::{ParallaxConfig, PointerConfig};

pub fn hero_offset(scroll: f64, config: &ParallaxConfig) -> f64 {
    scroll * config.hero_speed
}

pub fn layer_speed(index: usize, config: &ParallaxConfig) -> f64 {
    config.layer_base_speed + index as f64 * config.layer_speed_step
}

pub fn layer_offsets(scroll: f64, count: usize, config: &ParallaxConfig) -> Vec<f64> {
    (0..count)
        .map(|index| -(scroll * layer_speed(index, config)))
        .collect()
}

pub fn orb_offset(index: usize, x: f64, y: f64, config: &PointerConfig) -> (f64, f64) {
    let speed = (index + 1) as f64 * config.orb_speed_step;
    (x * speed, y * speed)
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}
