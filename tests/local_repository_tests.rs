//! Expanded tests for LocalRepository.
//!
//! These tests cover concurrent access patterns, edge cases, and error
//! conditions for the in-memory local repository implementation.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use lible::api::{EventId, TimetableId, UserId};
use lible::db::repositories::LocalRepository;
use lible::db::repository::{
    RepositoryError, SoundRepository, TimetableRepository, UserRepository,
};
use lible::models::{EventDraft, TimetableDraft, WeekdayMask};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn timetable_draft(name: &str) -> TimetableDraft {
    TimetableDraft {
        name: name.to_string(),
        valid_from: date(2024, 1, 1),
        valid_until: None,
        weekdays: WeekdayMask::new(0b001_1111).unwrap(),
    }
}

fn event_draft(name: &str, at: NaiveTime) -> EventDraft {
    EventDraft {
        event_name: name.to_string(),
        event_time: at,
        sound_id: lible::api::SoundId::new(1),
        template_instance_id: None,
        is_template_base: false,
    }
}

async fn seed_user(repo: &LocalRepository, username: &str) -> UserId {
    repo.create_user(username, "et").await.unwrap().id
}

// =========================================================
// ID Assignment & Isolation
// =========================================================

#[tokio::test]
async fn test_ids_are_sequential() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;

    let first = repo
        .create_timetable(owner, &timetable_draft("Esimene plaan"))
        .await
        .unwrap();
    let second = repo
        .create_timetable(owner, &timetable_draft("Teine plaan"))
        .await
        .unwrap();
    assert_eq!(first.id, TimetableId::new(1));
    assert_eq!(second.id, TimetableId::new(2));
}

#[tokio::test]
async fn test_event_ids_are_unique_across_timetables() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;
    let a = repo
        .create_timetable(owner, &timetable_draft("Plaan A"))
        .await
        .unwrap();
    let b = repo
        .create_timetable(owner, &timetable_draft("Plaan B"))
        .await
        .unwrap();

    let e1 = repo
        .insert_event(owner, a.id, &event_draft("Koolikell", time(8, 0)))
        .await
        .unwrap();
    let e2 = repo
        .insert_event(owner, b.id, &event_draft("Koolikell", time(8, 0)))
        .await
        .unwrap();
    assert_ne!(e1.id, e2.id);
}

#[tokio::test]
async fn test_clear_resets_state() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;
    repo.create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();
    assert_eq!(repo.timetable_count(), 1);

    repo.clear();
    assert_eq!(repo.timetable_count(), 0);
    assert!(repo.list_users().await.unwrap().is_empty());
}

// =========================================================
// Validation at the Storage Boundary
// =========================================================

#[tokio::test]
async fn test_invalid_draft_is_rejected() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;

    let mut draft = timetable_draft("Plaan");
    draft.valid_until = Some(date(2023, 1, 1));
    let err = repo.create_timetable(owner, &draft).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_invalid_event_name_is_rejected() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;
    let tt = repo
        .create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();

    let err = repo
        .insert_event(owner, tt.id, &event_draft("x", time(8, 0)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_update_event_not_found() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;
    let tt = repo
        .create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();

    let err = repo
        .update_event(owner, tt.id, EventId::new(99), &event_draft("Kell", time(8, 0)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_keeps_event_position() {
    let repo = LocalRepository::new();
    let owner = seed_user(&repo, "opetaja").await;
    let tt = repo
        .create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();
    let first = repo
        .insert_event(owner, tt.id, &event_draft("Esimene kell", time(8, 0)))
        .await
        .unwrap();
    repo.insert_event(owner, tt.id, &event_draft("Teine kell", time(9, 0)))
        .await
        .unwrap();

    repo.update_event(owner, tt.id, first.id, &event_draft("Muudetud kell", time(8, 30)))
        .await
        .unwrap();

    let stored = repo.get_timetable(owner, tt.id).await.unwrap();
    assert_eq!(stored.events[0].event_name, "Muudetud kell");
    assert_eq!(stored.events[0].id, first.id);
    assert_eq!(stored.events[1].event_name, "Teine kell");
}

// =========================================================
// Health Handling
// =========================================================

#[tokio::test]
async fn test_unhealthy_repository_rejects_operations() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    assert!(!repo.health_check().await.unwrap());

    let err = repo.list_sounds().await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError { .. }));

    repo.set_healthy(true);
    assert!(repo.list_sounds().await.unwrap().is_empty());
}

// =========================================================
// Concurrent Access Tests
// =========================================================

#[tokio::test]
async fn test_concurrent_writes_for_different_users() {
    let repo = Arc::new(LocalRepository::new());

    let mut owners = Vec::new();
    for i in 0..8 {
        owners.push(seed_user(&repo, &format!("kasutaja{}", i)).await);
    }

    let mut handles = Vec::new();
    for owner in owners.clone() {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create_timetable(owner, &timetable_draft("Plaan"))
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(repo.timetable_count(), 8);

    // Each user sees exactly their own timetable.
    for owner in owners {
        assert_eq!(repo.list_timetables(owner).await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_concurrent_event_inserts_land_in_one_timetable() {
    let repo = Arc::new(LocalRepository::new());
    let owner = seed_user(&repo, "opetaja").await;
    let tt = repo
        .create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..20u32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.insert_event(
                owner,
                tt.id,
                &event_draft(&format!("Kell {}", i), time(8, i % 60)),
            )
            .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let stored = repo.get_timetable(owner, tt.id).await.unwrap();
    assert_eq!(stored.events.len(), 20);

    // Every event got a distinct id.
    let mut ids: Vec<i64> = stored.events.iter().map(|e| e.id.value()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_concurrent_reads_during_writes() {
    let repo = Arc::new(LocalRepository::new());
    let owner = seed_user(&repo, "opetaja").await;
    repo.create_timetable(owner, &timetable_draft("Plaan"))
        .await
        .unwrap();

    let writer = {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move {
            for i in 0..10 {
                repo.create_timetable(owner, &timetable_draft(&format!("Plaan {}", i)))
                    .await
                    .unwrap();
            }
        })
    };

    let reader = {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move {
            for _ in 0..10 {
                let timetables = repo.list_timetables(owner).await.unwrap();
                assert!(!timetables.is_empty());
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(repo.timetable_count(), 11);
}
