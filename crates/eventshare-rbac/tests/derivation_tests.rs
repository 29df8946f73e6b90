//! Permission derivation as seen by the app.
//!
//! Covers the lifecycle entry points (creating and joining an event, role
//! changes) and concurrent use from many tasks.

use std::sync::Arc;

use eventshare_event::{EventSettings, GrantSet, ParticipantRecord, Role};
use eventshare_rbac::{derive_permissions, EventPermissions, PermissionAction};
use uuid::Uuid;

#[test]
fn event_creator_gets_everything() {
    let creator = ParticipantRecord::creator(Uuid::now_v7(), Uuid::now_v7(), "Selin");
    let perms = derive_permissions(Some(&creator), None);

    assert_eq!(perms.granted_actions(), PermissionAction::all());
    assert!(perms.is_creator);
    assert!(perms.is_organizer);
}

#[test]
fn downloads_disabled_for_everyone_when_event_blocks_them() {
    let event_id = Uuid::now_v7();
    let settings = EventSettings::default().with_download(false);

    for role in Role::all() {
        let record = ParticipantRecord::new(event_id, Uuid::now_v7(), "User", role);
        assert!(record.grants.can_download);
        assert!(!derive_permissions(Some(&record), Some(&settings)).can_download);
    }
}

#[test]
fn demotion_removes_tier_permissions() {
    let event_id = Uuid::now_v7();
    let creator = ParticipantRecord::creator(event_id, Uuid::now_v7(), "Selin");
    let mut member = ParticipantRecord::new(event_id, Uuid::now_v7(), "Deniz", Role::Organizer);

    assert!(derive_permissions(Some(&member), None).can_view_analytics);

    member.change_role(&creator, Role::Viewer).unwrap();
    let perms = derive_permissions(Some(&member), None);

    assert!(!perms.can_view_analytics);
    assert!(!perms.can_upload);
    assert!(perms.can_download);
    assert_eq!(perms.granted_actions(), vec![PermissionAction::DownloadMedia]);
}

#[test]
fn explicit_grants_never_reach_role_gated_flags() {
    let everything = GrantSet {
        can_upload: true,
        can_download: true,
        can_moderate: true,
        can_delete_media: true,
        can_manage_participants: true,
        can_edit_event: true,
    };
    let record = ParticipantRecord::new(Uuid::now_v7(), Uuid::now_v7(), "Ege", Role::Viewer)
        .with_grants(everything);
    let perms = derive_permissions(Some(&record), None);

    assert_eq!(
        perms,
        EventPermissions {
            can_upload: true,
            can_download: true,
            can_moderate: true,
            can_delete_media: true,
            can_manage_participants: true,
            can_edit_event: true,
            ..EventPermissions::none()
        }
    );
}

#[tokio::test]
async fn derivation_is_safe_across_tasks() {
    let record = Arc::new(ParticipantRecord::new(
        Uuid::now_v7(),
        Uuid::now_v7(),
        "Moderator",
        Role::Moderator,
    ));
    let expected = derive_permissions(Some(&*record), None);

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let record = Arc::clone(&record);
            tokio::spawn(async move { derive_permissions(Some(&*record), None) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
