//! Property tests for conflict resolution and materialization planning.

use proptest::prelude::*;

use django_deploy::domain::entities::HostState;
use django_deploy::domain::ports::EntryKind;
use django_deploy::domain::services::{plan_materialize, resolve, MaterializePlan, Resolution};

fn entry_kind() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::Missing),
        Just(EntryKind::File),
        Just(EntryKind::Symlink),
        Just(EntryKind::Directory),
        Just(EntryKind::Other),
    ]
}

prop_compose! {
    fn host_state()(
        service_exists in any::<bool>(),
        socket_exists in any::<bool>(),
        vhost_available_exists in any::<bool>(),
        vhost_enabled_exists in any::<bool>(),
        serving_entry in entry_kind(),
        matches in any::<bool>(),
    ) -> HostState {
        HostState {
            service_exists,
            socket_exists,
            vhost_available_exists,
            vhost_enabled_exists,
            project_matches: matches && serving_entry.is_present(),
            serving_entry,
        }
    }
}

proptest! {
    /// PROPERTY: A run without --fresh never removes anything; it either
    /// proceeds on a clean host or aborts.
    #[test]
    fn property_resolution_without_fresh_never_removes(state in host_state()) {
        let resolution = resolve(&state, false);
        prop_assert_ne!(resolution, Resolution::RemoveThenProceed);
        prop_assert_eq!(resolution == Resolution::Abort, state.any_artifact_exists());
    }

    /// PROPERTY: With --fresh the run is never aborted.
    #[test]
    fn property_fresh_never_aborts(state in host_state()) {
        prop_assert_ne!(resolve(&state, true), Resolution::Abort);
    }

    /// PROPERTY: A dry run never copies and a real run never links.
    #[test]
    fn property_dry_run_decides_link_or_copy(
        state in host_state(),
        fresh in any::<bool>(),
        dry_run in any::<bool>(),
    ) {
        match plan_materialize(&state, fresh, dry_run) {
            MaterializePlan::Link => prop_assert!(dry_run),
            MaterializePlan::Copy { replace } => {
                prop_assert!(!dry_run);
                if replace {
                    prop_assert!(fresh);
                }
            }
            MaterializePlan::Skip => prop_assert!(!fresh || dry_run),
        }
    }
}
