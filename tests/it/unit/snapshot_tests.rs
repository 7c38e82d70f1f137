//! Snapshot tests using the insta crate.
//!
//! Manager snapshots capture the whole observable state (session, cached
//! geometry, last applied positions, frame counters) in one assertion.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestAreaBuilder;
use areaviz::AreaConfig;

#[test]
fn snapshot_manager_after_centered_drag() {
    let mut area = TestAreaBuilder::new().with_units_per_pixel(0.5).build();

    area.manager.begin_drag(0.0, 0.0);
    area.manager.update_drag(200.0, 200.0);
    area.flush(0.0);

    insta::assert_json_snapshot!(area.manager.snapshot(), @r###"
    {
      "enabled": true,
      "active": true,
      "session": {
        "anchor_offset": {
          "x": 0.0,
          "y": 0.0
        },
        "start_pointer": {
          "x": 0.0,
          "y": 0.0
        },
        "source": "api"
      },
      "scale": 1.0,
      "units_per_pixel": 0.5,
      "container_size": {
        "width": 400.0,
        "height": 400.0
      },
      "position": {
        "x": 200.0,
        "y": 200.0
      },
      "physical_position": {
        "x": 0.0,
        "y": 0.0
      },
      "pending_frame": null,
      "listeners": 7,
      "stats": {
        "requested": 1,
        "applied": 1,
        "deferred": 0,
        "stale": 0,
        "coalesced": 0
      }
    }
    "###);
}

#[test]
fn snapshot_default_config() {
    insta::assert_json_snapshot!(AreaConfig::default(), @r###"
    {
      "scale": 1.0,
      "units_per_pixel": 1.0,
      "precision": 1,
      "min_frame_interval_ms": 16.0,
      "x_field_id": "area-offset-x",
      "y_field_id": "area-offset-y",
      "drag_hints": true
    }
    "###);
}
