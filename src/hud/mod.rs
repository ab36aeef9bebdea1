//! HUD control: translate the current settings into session environment
//! variables consumed by the Metal runtime.

pub mod alignment;
pub mod elements;
mod launchctl;

pub use alignment::{alignment_value, ALIGNMENTS};
pub use elements::{HudElement, Preset, ELEMENTS, PRESETS};
pub use launchctl::{Launchctl, SessionEnv};

use crate::settings::SettingsStore;

pub const ENV_ENABLED: &str = "MTL_HUD_ENABLED";
pub const ENV_ELEMENTS: &str = "MTL_HUD_ELEMENTS";
pub const ENV_OPACITY: &str = "MTL_HUD_OPACITY";
pub const ENV_SCALE: &str = "MTL_HUD_SCALE";
pub const ENV_ALIGNMENT: &str = "MTL_HUD_ALIGNMENT";

pub const STATUS_APPLIED: &str = "✅ Applied Metal HUD settings.";
pub const STATUS_DISABLED: &str = "🚫 Disabled Metal HUD.";

/// Applies the stored settings to the user session.
///
/// The five variables are always written in the same order. Writes are
/// independent and best-effort; the status line reports the attempted
/// action, not subprocess success.
pub struct HudController {
    env: Box<dyn SessionEnv>,
}

impl HudController {
    pub fn new(env: Box<dyn SessionEnv>) -> Self {
        Self { env }
    }

    /// Push the current settings into the session environment.
    ///
    /// With the HUD disabled this is exactly `disable()`.
    pub fn apply(&self, store: &mut SettingsStore) {
        if !store.settings().enabled {
            self.disable(store);
            return;
        }

        let settings = store.settings();
        let joined = settings
            .selected_elements
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(",");
        let opacity = format!("{:.3}", settings.opacity);
        let scale = format!("{:.3}", settings.scale);
        let position = alignment_value(&settings.alignment);

        self.env.setenv(ENV_ENABLED, "1");
        self.env.setenv(ENV_ELEMENTS, &joined);
        self.env.setenv(ENV_OPACITY, &opacity);
        self.env.setenv(ENV_SCALE, &scale);
        self.env.setenv(ENV_ALIGNMENT, position);

        store.set_status_message(STATUS_APPLIED);
    }

    /// Clear the enable flag from the session environment.
    pub fn disable(&self, store: &mut SettingsStore) {
        self.env.unsetenv(ENV_ENABLED);
        store.set_status_message(STATUS_DISABLED);
    }

    /// Re-apply at startup when the app was launched by the login path
    /// and the user opted into boot-time enablement.
    pub fn apply_on_boot_if_needed(&self, store: &mut SettingsStore) {
        if store.settings().enable_on_boot && store.settings().enabled {
            self.apply(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::tests::FakeLogin;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum EnvOp {
        Set(String, String),
        Unset(String),
    }

    #[derive(Clone, Default)]
    struct RecordingEnv {
        ops: Rc<RefCell<Vec<EnvOp>>>,
    }

    impl SessionEnv for RecordingEnv {
        fn setenv(&self, name: &str, value: &str) {
            self.ops
                .borrow_mut()
                .push(EnvOp::Set(name.to_string(), value.to_string()));
        }

        fn unsetenv(&self, name: &str) {
            self.ops.borrow_mut().push(EnvOp::Unset(name.to_string()));
        }
    }

    fn fixture() -> (TempDir, SettingsStore, HudController, RecordingEnv) {
        let tmp = TempDir::new().expect("tempdir");
        let store = SettingsStore::load_from(
            tmp.path().join("settings.toml"),
            Box::new(FakeLogin::default()),
        );
        let env = RecordingEnv::default();
        let controller = HudController::new(Box::new(env.clone()));
        (tmp, store, controller, env)
    }

    #[test]
    fn apply_with_defaults_issues_five_sets_in_order() {
        let (_tmp, mut store, controller, env) = fixture();
        store.set_enabled(true);

        controller.apply(&mut store);

        let ops = env.ops.borrow();
        assert_eq!(
            *ops,
            vec![
                EnvOp::Set(ENV_ENABLED.into(), "1".into()),
                EnvOp::Set(ENV_ELEMENTS.into(), "".into()),
                EnvOp::Set(ENV_OPACITY.into(), "1.000".into()),
                EnvOp::Set(ENV_SCALE.into(), "0.200".into()),
                EnvOp::Set(ENV_ALIGNMENT.into(), "12".into()),
            ]
        );
        assert_eq!(store.settings().status_message, STATUS_APPLIED);
    }

    #[test]
    fn apply_joins_selected_elements() {
        let (_tmp, mut store, controller, env) = fixture();
        store.set_enabled(true);
        store.set_element_selected("fps", true);
        store.set_element_selected("memory", true);

        controller.apply(&mut store);

        let ops = env.ops.borrow();
        let EnvOp::Set(name, value) = &ops[1] else {
            panic!("expected a set op, got {:?}", ops[1]);
        };
        assert_eq!(name, ENV_ELEMENTS);
        assert!(
            value == "fps,memory" || value == "memory,fps",
            "unexpected join: {value}"
        );
    }

    #[test]
    fn apply_formats_three_decimals() {
        let (_tmp, mut store, controller, env) = fixture();
        store.set_enabled(true);
        store.set_scale(0.5);
        store.set_opacity(0.25);

        controller.apply(&mut store);

        let ops = env.ops.borrow();
        assert_eq!(ops[2], EnvOp::Set(ENV_OPACITY.into(), "0.250".into()));
        assert_eq!(ops[3], EnvOp::Set(ENV_SCALE.into(), "0.500".into()));
    }

    #[test]
    fn apply_while_disabled_only_unsets() {
        let (_tmp, mut store, controller, env) = fixture();

        controller.apply(&mut store);

        let ops = env.ops.borrow();
        assert_eq!(*ops, vec![EnvOp::Unset(ENV_ENABLED.into())]);
        assert_eq!(store.settings().status_message, STATUS_DISABLED);
    }

    #[test]
    fn disable_always_issues_one_unset() {
        let (_tmp, mut store, controller, env) = fixture();
        store.set_enabled(true);

        controller.disable(&mut store);
        controller.disable(&mut store);

        let ops = env.ops.borrow();
        assert_eq!(
            *ops,
            vec![
                EnvOp::Unset(ENV_ENABLED.into()),
                EnvOp::Unset(ENV_ENABLED.into()),
            ]
        );
        assert_eq!(store.settings().status_message, STATUS_DISABLED);
    }

    #[test]
    fn unknown_alignment_falls_back_in_apply() {
        let (_tmp, mut store, controller, env) = fixture();
        store.set_enabled(true);
        store.set_alignment("nowhere");

        controller.apply(&mut store);

        let ops = env.ops.borrow();
        assert_eq!(ops[4], EnvOp::Set(ENV_ALIGNMENT.into(), "4".into()));
    }

    #[test]
    fn boot_apply_requires_both_flags() {
        let (_tmp, mut store, controller, env) = fixture();

        controller.apply_on_boot_if_needed(&mut store);
        assert!(env.ops.borrow().is_empty());

        store.set_enabled(true);
        controller.apply_on_boot_if_needed(&mut store);
        assert!(env.ops.borrow().is_empty());

        store.set_enable_on_boot(true);
        controller.apply_on_boot_if_needed(&mut store);
        assert_eq!(env.ops.borrow().len(), 5);
    }
}
