use tank_ngin::{config::SceneConfig, flow, scene::TankScene};

fn main() -> anyhow::Result<()> {
    let config = SceneConfig::default();
    flow::run(config.clone(), vec![TankScene::constructor(config)])
}
