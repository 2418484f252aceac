//! Keyboard to tank action mapping.
//!
//! Window events update a [`KeyboardState`] of held actions. Once per frame
//! the state is turned into a [`TankInput`], the plain set of flags the game
//! rules consume.

use std::collections::{HashMap, HashSet};

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Everything the tank can be told to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankAction {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
    BarrelUp,
    BarrelDown,
    TurretLeft,
    TurretRight,
    Fire,
}

/// Pressed flags for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TankInput {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub barrel_up: bool,
    pub barrel_down: bool,
    pub turret_left: bool,
    pub turret_right: bool,
    pub fire: bool,
}

impl TankInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: TankAction) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: TankAction, pressed: bool) {
        let flag = match action {
            TankAction::MoveForward => &mut self.forward,
            TankAction::MoveBackward => &mut self.backward,
            TankAction::RotateLeft => &mut self.rotate_left,
            TankAction::RotateRight => &mut self.rotate_right,
            TankAction::BarrelUp => &mut self.barrel_up,
            TankAction::BarrelDown => &mut self.barrel_down,
            TankAction::TurretLeft => &mut self.turret_left,
            TankAction::TurretRight => &mut self.turret_right,
            TankAction::Fire => &mut self.fire,
        };
        *flag = pressed;
    }
}

/// Maps physical keys to actions and remembers which are held.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    bindings: HashMap<KeyCode, TankAction>,
    held: HashSet<TankAction>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_bindings(Self::default_bindings())
    }

    pub fn with_bindings(bindings: HashMap<KeyCode, TankAction>) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Arrows drive the body, U/J pitch the barrel, H/K swing the barrel,
    /// space fires.
    pub fn default_bindings() -> HashMap<KeyCode, TankAction> {
        HashMap::from([
            (KeyCode::ArrowUp, TankAction::MoveForward),
            (KeyCode::ArrowDown, TankAction::MoveBackward),
            (KeyCode::ArrowLeft, TankAction::RotateLeft),
            (KeyCode::ArrowRight, TankAction::RotateRight),
            (KeyCode::KeyU, TankAction::BarrelUp),
            (KeyCode::KeyJ, TankAction::BarrelDown),
            (KeyCode::KeyH, TankAction::TurretLeft),
            (KeyCode::KeyK, TankAction::TurretRight),
            (KeyCode::Space, TankAction::Fire),
        ])
    }

    /// Record a key transition. Returns `true` if the key is bound.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(action) = self.bindings.get(&key).copied() else {
            return false;
        };
        match state {
            ElementState::Pressed => self.held.insert(action),
            ElementState::Released => self.held.remove(&action),
        };
        true
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => self.process_key(*key, *state),
            // keys released while unfocused never send a release
            WindowEvent::Focused(false) => {
                self.held.clear();
                false
            }
            _ => false,
        }
    }

    pub fn is_held(&self, action: TankAction) -> bool {
        self.held.contains(&action)
    }

    pub fn snapshot(&self) -> TankInput {
        self.held
            .iter()
            .fold(TankInput::none(), |input, action| input.with(*action))
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
