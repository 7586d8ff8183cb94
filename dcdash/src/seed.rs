use dcd_core::models::SegmentRecord;

/// The built-in Risavika customer segments, the dashboard's startup state.
///
/// Prices and costs are €/MWh, volumes ktpa. This is the one place the
/// literal seed data lives; the core takes whatever sequence it is given.
pub fn risavika_seed() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::new("Maritime Export - Hub Bunkering", 35.0, 46.0, 25.0),
        SegmentRecord::new("Maritime Export - Spot Delivery", 36.0, 47.0, 20.0),
        SegmentRecord::new("Maritime Local - Ferries", 41.0, 43.0, 40.0),
        SegmentRecord::new("Maritime Local - OSVs", 42.0, 43.0, 35.0),
        SegmentRecord::new("Industry - CHP", 47.0, 42.0, 17.0),
        SegmentRecord::new("Road Export - Sweden Fleets", 48.0, 43.0, 27.0),
        SegmentRecord::new("Industry - Off-grid", 49.0, 46.0, 15.0),
        SegmentRecord::new("Road Export - Germany Fleets", 51.0, 47.0, 20.0),
        SegmentRecord::new("Onshore Tankers - Highway", 53.0, 48.0, 22.0),
        SegmentRecord::new("Onshore Tankers - Local", 58.0, 48.0, 23.0),
    ]
}
