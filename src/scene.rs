//! The tank scene.
//!
//! [`TankScene`] owns the [`World`] and one [`Drawable`] per visible part.
//! Every frame it feeds the held keys into the world, reacts to the
//! resulting events by creating or dropping GPU meshes and rewrites the
//! transform buffers of everything that moved.

use std::pin::Pin;

use cgmath::Matrix4;
use winit::event::{DeviceEvent, WindowEvent};

use crate::{
    clock::Clock,
    config::SceneConfig,
    context::{Context, InitContext},
    data_structures::{
        drawable::Drawable,
        model::Material,
        texture::Texture,
    },
    flow::{FlowConstructor, GraphicsFlow, Out},
    input::KeyboardState,
    primitives::{Cube, Cylinder, Shape, Sphere},
    render::Render,
    resources::load_material,
    world::{World, WorldEvent},
};

const BODY_COLOUR: [u8; 4] = [85, 107, 47, 255];
const TURRET_COLOUR: [u8; 4] = [107, 142, 35, 255];
const BARREL_COLOUR: [u8; 4] = [60, 60, 60, 255];
const PROJECTILE_COLOUR: [u8; 4] = [230, 200, 40, 255];
const TARGET_COLOUR: [u8; 4] = [200, 40, 40, 255];
const FLOOR_COLOUR: [u8; 4] = [120, 120, 120, 255];
const SPHERE_COLOUR: [u8; 4] = [40, 90, 200, 255];

pub struct TankScene {
    world: World,
    keyboard: KeyboardState,
    body: Drawable,
    turret: Drawable,
    barrel: Drawable,
    projectile: Option<Drawable>,
    target: Option<Drawable>,
    floor: Drawable,
    sphere: Drawable,
    projectile_shape: Shape,
    projectile_texture: Texture,
    material_layout: wgpu::BindGroupLayout,
}

impl TankScene {
    pub async fn new(init: InitContext, config: SceneConfig) -> anyhow::Result<Self> {
        let InitContext {
            device,
            queue,
            material_layout,
        } = init;
        let world = World::from_config(&config);
        let tank = &world.tank;
        let tank_config = config.tank;
        let layout = &material_layout;

        let body_size = tank_config.body_size;
        let body = Drawable::new(
            &device,
            "tank body",
            Cube::new(body_size.x, body_size.y, body_size.z).into(),
            load_material("tank_body.png", BODY_COLOUR, &device, &queue, layout).await,
            tank.body_matrix(),
        )?;
        let turret = Drawable::new(
            &device,
            "tank turret",
            Sphere::new(
                tank_config.turret_radius,
                tank_config.sector_count,
                tank_config.stack_count,
                false,
            )
            .into(),
            load_material("tank_turret.png", TURRET_COLOUR, &device, &queue, layout).await,
            tank.turret_matrix(),
        )?;
        let barrel = Drawable::new(
            &device,
            "tank barrel",
            Cylinder::new(
                tank_config.barrel_radius,
                tank_config.barrel_length,
                tank_config.sector_count,
            )
            .into(),
            load_material("tank_barrel.png", BARREL_COLOUR, &device, &queue, layout).await,
            tank.barrel_matrix(),
        )?;

        let target_size = config.target_size;
        let target = Drawable::new(
            &device,
            "target",
            Cube::new(target_size.x, target_size.y, target_size.z).into(),
            load_material("target.png", TARGET_COLOUR, &device, &queue, layout).await,
            Matrix4::from_translation(config.target_position),
        )?;

        let floor_size = config.floor_size;
        let floor = Drawable::new(
            &device,
            "floor",
            Cube::new(floor_size.x, floor_size.y, floor_size.z).into(),
            load_material("floor.png", FLOOR_COLOUR, &device, &queue, layout).await,
            Matrix4::from_translation(config.floor_position),
        )?;

        let sphere = Drawable::new(
            &device,
            "sphere",
            Sphere::new(
                config.sphere_radius,
                config.sphere_sectors,
                config.sphere_stacks,
                true,
            )
            .into(),
            load_material("sphere.png", SPHERE_COLOUR, &device, &queue, layout).await,
            Matrix4::from_translation(config.sphere_position),
        )?;

        let projectile_shape = Cylinder::new(
            tank_config.projectile_radius,
            tank_config.projectile_length,
            tank_config.sector_count,
        )
        .into();
        let projectile_texture =
            Texture::from_colour(&device, &queue, PROJECTILE_COLOUR, "projectile");

        Ok(Self {
            world,
            keyboard: KeyboardState::new(),
            body,
            turret,
            barrel,
            projectile: None,
            target: Some(target),
            floor,
            sphere,
            projectile_shape,
            projectile_texture,
            material_layout,
        })
    }

    /// A constructor for [`flow::run`](crate::flow::run).
    pub fn constructor(config: SceneConfig) -> FlowConstructor {
        Box::new(
            move |init| -> Pin<Box<dyn Future<Output = anyhow::Result<Box<dyn GraphicsFlow>>>>> {
                Box::pin(async move {
                    let scene: Box<dyn GraphicsFlow> = Box::new(TankScene::new(init, config).await?);
                    anyhow::Ok(scene)
                })
            },
        )
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn spawn_projectile(&mut self, device: &wgpu::Device) {
        let Some(model) = self.world.tank.projectile_matrix() else {
            return;
        };
        let material = Material::new(
            device,
            "projectile",
            self.projectile_texture.clone(),
            &self.material_layout,
        );
        match Drawable::new(device, "projectile", self.projectile_shape, material, model) {
            Ok(drawable) => self.projectile = Some(drawable),
            Err(e) => log::error!("cannot create projectile mesh: {e:#}"),
        }
    }

    fn handle_event(&mut self, ctx: &Context, event: WorldEvent) {
        match event {
            WorldEvent::Fired => self.spawn_projectile(&ctx.device),
            WorldEvent::TargetRammed => self.target = None,
            WorldEvent::TargetHit => {
                self.target = None;
                self.projectile = None;
            }
            WorldEvent::ProjectileExpired => self.projectile = None,
        }
    }
}

impl GraphicsFlow for TankScene {
    fn on_init(&mut self, _ctx: &mut Context) -> Out {
        log::info!("tank scene ready");
        Out::Empty
    }

    fn on_update(&mut self, ctx: &Context, clock: &Clock) -> Out {
        let input = self.keyboard.snapshot();
        let events = self.world.update(&input, clock.delta_secs());
        for event in events {
            self.handle_event(ctx, event);
        }

        let tank = &self.world.tank;
        self.body.update(&ctx.queue, tank.body_matrix());
        self.turret.update(&ctx.queue, tank.turret_matrix());
        self.barrel.update(&ctx.queue, tank.barrel_matrix());
        if let (Some(drawable), Some(model)) = (&self.projectile, tank.projectile_matrix()) {
            drawable.update(&ctx.queue, model);
        }
        Out::Empty
    }

    fn on_device_events(&mut self, _ctx: &Context, _event: &DeviceEvent) -> Out {
        Out::Empty
    }

    fn on_window_events(&mut self, _ctx: &Context, event: &WindowEvent) -> Out {
        self.keyboard.handle_window_events(event);
        Out::Empty
    }

    fn on_render(&self) -> Render<'_> {
        let mut renders: Vec<Render> = vec![
            (&self.floor).into(),
            (&self.body).into(),
            (&self.turret).into(),
            (&self.barrel).into(),
            (&self.sphere).into(),
        ];
        if let Some(target) = &self.target {
            renders.push(target.into());
        }
        if let Some(projectile) = &self.projectile {
            renders.push(projectile.into());
        }
        Render::Composed(renders)
    }
}
