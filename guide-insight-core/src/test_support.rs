//! Test-only helpers for building guide populations in unit and behaviour
//! tests.

use crate::GuideRecord;

/// Build a record from its four counters.
#[must_use]
pub fn guide(
    id: i64,
    tours_done: u64,
    photos_taken_amount: u64,
    requested_client_info: u64,
) -> GuideRecord {
    GuideRecord::new(id)
        .with_tours_done(tours_done)
        .with_photos_taken_amount(photos_taken_amount)
        .with_photos_taken_frequency(photos_taken_amount.min(tours_done))
        .with_requested_client_info(requested_client_info)
}

/// A small, varied population covering every lifecycle stage.
///
/// | id | name | tours | photos | requests | favourite |
/// |----|------|-------|--------|----------|-----------|
/// | 1 | Ana | 0 | 0 | 0 | no |
/// | 2 | Bruno | 2 | 6 | 0 | yes |
/// | 3 | Carla | 4 | 2 | 5 | no |
/// | 4 | Diego | 8 | 40 | 2 | yes |
/// | 5 | Elena | 12 | 30 | 1 | no |
/// | 6 | Fabio | 10 | 4 | 12 | no |
#[must_use]
pub fn sample_population() -> Vec<GuideRecord> {
    vec![
        guide(1, 0, 0, 0).with_name("Ana"),
        guide(2, 2, 6, 0).with_name("Bruno").with_favourite(true),
        guide(3, 4, 2, 5).with_name("Carla"),
        guide(4, 8, 40, 2).with_name("Diego").with_favourite(true),
        guide(5, 12, 30, 1).with_name("Elena"),
        guide(6, 10, 4, 12).with_name("Fabio"),
    ]
}
