//! Wallroute demo: routes a wire around an L-shaped room.
//!
//! Usage:
//! ```text
//! cargo run --example route_room
//! RUST_LOG=wallroute=debug cargo run --example route_room
//! ```

use wallroute::boundary::{BoundaryLoop, RoomBoundary};
use wallroute::geometry::{Pline, PlineVertex};
use wallroute::math::Point3;
use wallroute::model::{Aabb, BuildingModel, DoorData, ElementId, LevelData, RoomData, WallData};
use wallroute::operations::query::{BoundingDoors, Perimeter, RoomCenter, RoomDoors};
use wallroute::operations::{RouteRoomWire, RoutingOptions, VertexElevation};
use wallroute::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for wallroute.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wallroute=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut model = BuildingModel::new();
    let level = model.add_level(LevelData::new("Level 1", 0.0));
    let walls: Vec<ElementId> = (0..6)
        .map(|_| model.add_wall(WallData::new("Basic Wall - 200mm", level)))
        .collect();

    // One wall at the inner corner is curved.
    let pline = Pline {
        vertices: vec![
            PlineVertex::line(0.0, 0.0),
            PlineVertex::line(8.0, 0.0),
            PlineVertex::line(8.0, 4.0),
            PlineVertex::new(4.0, 4.0, 0.25),
            PlineVertex::line(4.0, 8.0),
            PlineVertex::line(0.0, 8.0),
        ],
        closed: true,
    };
    let mut outline = BoundaryLoop::from_pline(&pline, 0.0, &walls)?;
    // Hosts return boundary segments in no particular order.
    outline.segments.rotate_left(2);
    outline.segments.swap(0, 3);

    let room = model.add_room(RoomData::new(
        "Workshop",
        level,
        Point3::new(2.0, 2.0, 0.0),
        Aabb::new(Point3::origin(), Point3::new(8.0, 8.0, 3.0)),
        RoomBoundary::new(vec![outline]),
    ));
    let door = model.add_door(DoorData::new(level, walls[0], Some(room), None));

    let data = model.room(room)?;
    println!("room:      {}", data.name);
    println!("perimeter: {:.3}", Perimeter::new(&data.boundary).execute());
    println!("center:    {}", RoomCenter::new(room).execute(&model)?);
    let doors = RoomDoors::new(room).execute(&model)?;
    let bounding = BoundingDoors::new(room, doors).execute(&model)?;
    println!("doors on bounding walls: {}", bounding.len());
    debug_assert!(bounding.contains(&door));

    let start = Point3::new(6.0, 0.0, 1.2);
    let end = Point3::new(2.0, 8.0, 1.2);
    let options = RoutingOptions::default().with_vertex_elevation(VertexElevation::StartPoint);
    let path = RouteRoomWire::new(room, start, end)
        .with_options(options)
        .execute(&model)?;

    println!("path ({:.3} long):", path.length());
    for point in path.points() {
        println!("  ({:.3}, {:.3}, {:.3})", point.x, point.y, point.z);
    }
    Ok(())
}
