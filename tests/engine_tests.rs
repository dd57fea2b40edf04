use fleetgrid::{
    CellKind, Direction, Grid, PlacementEngine, PlacementError, Point, Ship, ShipClass, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_scenario_battleship_then_destroyer() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    let id = engine
        .try_place_at(&mut grid, Ship::new(ShipClass::Battleship), Point::new(0, 0), Direction::Right)
        .unwrap();
    let battleship = grid.ship(id).unwrap();
    let positions: Vec<_> = battleship.cells().iter().map(|c| c.position()).collect();
    assert_eq!(
        positions,
        vec![
            Point::new(0, 0),
            Point::new(40, 0),
            Point::new(80, 0),
            Point::new(120, 0),
            Point::new(160, 0)
        ]
    );

    // adjacent row is rejected and the destroyer comes back unplaced
    let destroyer = engine
        .try_place_at(&mut grid, Ship::new(ShipClass::Destroyer), Point::new(0, 40), Direction::Right)
        .unwrap_err();
    assert!(!destroyer.is_placed());
    assert_eq!(grid.ships().len(), 1);

    engine
        .try_place_at(&mut grid, destroyer, Point::new(0, 120), Direction::Right)
        .unwrap();
    assert_eq!(grid.ships().len(), 2);
    assert_eq!(grid.water().len(), 100 - 5 - 3);
}

#[test]
fn test_try_place_at_snaps_to_enclosing_cell() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    let id = engine
        .try_place_at(&mut grid, Ship::new(ShipClass::UBoat), Point::new(95, 119), Direction::Down)
        .unwrap();
    assert_eq!(grid.ship(id).unwrap().anchor(), Some(Point::new(80, 80)));
}

#[test]
fn test_try_place_at_rejects_out_of_bounds() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    let ship = engine
        .try_place_at(&mut grid, Ship::new(ShipClass::Cruiser), Point::new(300, 0), Direction::Right)
        .unwrap_err();
    assert!(!ship.is_placed());

    // pointer outside the grid entirely
    let ship = engine
        .try_place_at(&mut grid, ship, Point::new(500, 10), Direction::Left)
        .unwrap_err();
    assert!(!ship.is_placed());
    assert!(!grid.has_ships());
    assert_eq!(grid.water().len(), 100);
}

#[test]
fn test_try_place_at_rejects_direction_none() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    let ship = engine
        .try_place_at(&mut grid, Ship::new(ShipClass::UBoat), Point::new(0, 0), Direction::None)
        .unwrap_err();
    assert!(!ship.is_placed());
}

#[test]
fn test_expand_requires_unplaced_ship() {
    let engine = PlacementEngine::new();
    let grid = Grid::default();
    let mut ship = Ship::new(ShipClass::Destroyer);
    engine
        .expand(&grid, &mut ship, Point::new(120, 120), Direction::Up)
        .unwrap();
    let ys: Vec<_> = ship.cells().iter().map(|c| c.position().y).collect();
    assert_eq!(ys, vec![120, 80, 40]);
    assert_eq!(ship.direction(), Direction::Up);

    assert_eq!(
        engine.expand(&grid, &mut ship, Point::new(0, 0), Direction::Down),
        Err(PlacementError::AlreadyPlaced)
    );
    let mut fresh = Ship::new(ShipClass::Destroyer);
    assert_eq!(
        engine.expand(&grid, &mut fresh, Point::new(0, 0), Direction::None),
        Err(PlacementError::NotInitialized)
    );
}

#[test]
fn test_preview_does_not_commit() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    let ghost = engine
        .preview(&grid, Ship::new(ShipClass::Cruiser), Point::new(40, 40), Direction::Down)
        .unwrap();
    assert_eq!(ghost.cells().len(), 4);
    assert!(!grid.has_ships());

    engine.place_directly(&mut grid, ghost).unwrap();
    let blocked = engine
        .preview(&grid, Ship::new(ShipClass::UBoat), Point::new(80, 80), Direction::Right)
        .unwrap_err();
    assert!(!blocked.is_placed());
}

#[test]
fn test_place_directly_infers_direction() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    let ship = Ship::from_positions(
        ShipClass::Destroyer,
        [Point::new(0, 0), Point::new(0, 40), Point::new(0, 80)],
    );
    let id = engine.place_directly(&mut grid, ship).unwrap();
    assert_eq!(grid.ship(id).unwrap().direction(), Direction::Down);

    let ship = Ship::from_positions(
        ShipClass::UBoat,
        [Point::new(360, 360), Point::new(320, 360)],
    );
    let id = engine.place_directly(&mut grid, ship).unwrap();
    assert_eq!(grid.ship(id).unwrap().direction(), Direction::Left);
    assert_eq!(grid.water().len(), 95);
}

#[test]
fn test_place_directly_errors() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    assert_eq!(
        engine.place_directly(&mut grid, Ship::new(ShipClass::UBoat)),
        Err(PlacementError::NotInitialized)
    );
    // degenerate: first two cells coincide
    let stacked = Ship::from_positions(ShipClass::UBoat, [Point::new(0, 0), Point::new(0, 0)]);
    assert_eq!(
        engine.place_directly(&mut grid, stacked),
        Err(PlacementError::NotInitialized)
    );
    // gap in the run
    let gapped = Ship::from_positions(
        ShipClass::Destroyer,
        [Point::new(0, 0), Point::new(40, 0), Point::new(120, 0)],
    );
    assert_eq!(
        engine.place_directly(&mut grid, gapped),
        Err(PlacementError::NotInitialized)
    );
    // wrong length for the class
    let short = Ship::from_positions(ShipClass::Cruiser, [Point::new(0, 0), Point::new(40, 0)]);
    assert_eq!(
        engine.place_directly(&mut grid, short),
        Err(PlacementError::NotInitialized)
    );

    let overhang = Ship::from_positions(
        ShipClass::Cruiser,
        (0..4).map(|i| Point::new(320 + 40 * i, 0)),
    );
    assert_eq!(
        engine.place_directly(&mut grid, overhang),
        Err(PlacementError::NotOnField)
    );

    let first = Ship::from_positions(
        ShipClass::Battleship,
        (0..5).map(|i| Point::new(40 * i, 0)),
    );
    engine.place_directly(&mut grid, first).unwrap();
    let touching = Ship::from_positions(
        ShipClass::Destroyer,
        (0..3).map(|i| Point::new(40 * i, 40)),
    );
    assert_eq!(
        engine.place_directly(&mut grid, touching),
        Err(PlacementError::Knocking)
    );
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_place_directly_rejects_extreme_coordinates() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    let far_left = Ship::from_positions(
        ShipClass::UBoat,
        [Point::new(i32::MIN, 0), Point::new(i32::MIN, 40)],
    );
    assert_eq!(
        engine.place_directly(&mut grid, far_left),
        Err(PlacementError::NotOnField)
    );
    let spanning = Ship::from_positions(
        ShipClass::UBoat,
        [Point::new(i32::MAX, 0), Point::new(i32::MIN, 0)],
    );
    assert_eq!(
        engine.place_directly(&mut grid, spanning),
        Err(PlacementError::NotOnField)
    );
    let far_down = Ship::from_positions(
        ShipClass::UBoat,
        [Point::new(0, i32::MAX), Point::new(0, i32::MAX - 40)],
    );
    assert_eq!(
        engine.place_directly(&mut grid, far_down),
        Err(PlacementError::NotOnField)
    );
    assert!(!grid.has_ships());
}

#[test]
fn test_populated_ship_is_handed_back_untouched() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();

    let ghost = engine
        .preview(&grid, Ship::new(ShipClass::Destroyer), Point::new(40, 40), Direction::Right)
        .unwrap();
    let before: Vec<_> = ghost.cells().iter().map(|c| c.position()).collect();

    let ghost = engine
        .try_place_at(&mut grid, ghost, Point::new(200, 200), Direction::Down)
        .unwrap_err();
    let after: Vec<_> = ghost.cells().iter().map(|c| c.position()).collect();
    assert_eq!(after, before);
    assert!(!grid.has_ships());

    let ghost = engine
        .preview(&grid, ghost, Point::new(200, 200), Direction::Down)
        .unwrap_err();
    assert_eq!(ghost.cells().len(), 3);

    engine.place_directly(&mut grid, ghost).unwrap();
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_place_directly_keeps_hit_flags() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    let cells = vec![
        fleetgrid::Cell::ship(Point::new(0, 0)).with_hit(true),
        fleetgrid::Cell::ship(Point::new(40, 0)),
    ];
    let id = engine
        .place_directly(&mut grid, Ship::with_cells(ShipClass::UBoat, cells))
        .unwrap();
    assert_eq!(grid.ship(id).unwrap().hits(), 1);
}

#[test]
fn test_place_randomly_seeded_is_reproducible() {
    let engine = PlacementEngine::new();
    let mut a = Grid::default();
    let mut b = Grid::default();
    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);

    engine.place_fleet(&mut a, &FLEET, &mut rng_a).unwrap();
    engine.place_fleet(&mut b, &FLEET, &mut rng_b).unwrap();
    assert_eq!(a.ships(), b.ships());
    assert_eq!(a.ships().len(), FLEET.len());
}

#[test]
fn test_place_randomly_gives_up_when_nothing_fits() {
    let engine = PlacementEngine::with_max_attempts(200);
    let mut grid = Grid::new(3, 3, 40).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);

    let err = engine
        .place_randomly(&mut grid, Ship::new(ShipClass::Battleship), &mut rng)
        .unwrap_err();
    assert_eq!(err, PlacementError::Unplaceable { attempts: 200 });
    assert!(!grid.has_ships());
}

#[test]
fn test_place_randomly_on_crowded_grid() {
    // a 2x1 grid fits exactly one u-boat and nothing else
    let engine = PlacementEngine::with_max_attempts(500);
    let mut grid = Grid::new(2, 1, 40).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);

    engine
        .place_randomly(&mut grid, Ship::new(ShipClass::UBoat), &mut rng)
        .unwrap();
    assert!(grid.water().is_empty());
    assert!(matches!(
        engine.place_randomly(&mut grid, Ship::new(ShipClass::UBoat), &mut rng),
        Err(PlacementError::Unplaceable { .. })
    ));
}

#[test]
fn test_place_randomly_rejects_placed_ship() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    let mut rng = SmallRng::seed_from_u64(1);
    let ship = Ship::from_positions(ShipClass::UBoat, [Point::new(0, 0), Point::new(40, 0)]);
    assert_eq!(
        engine.place_randomly(&mut grid, ship, &mut rng),
        Err(PlacementError::AlreadyPlaced)
    );
}

#[test]
fn test_hit_marks_cells() {
    let engine = PlacementEngine::new();
    let mut grid = Grid::default();
    engine
        .try_place_at(&mut grid, Ship::new(ShipClass::UBoat), Point::new(0, 0), Direction::Right)
        .unwrap();

    assert_eq!(grid.hit(Point::new(10, 10)), Some(CellKind::Ship));
    assert_eq!(grid.hit(Point::new(200, 200)), Some(CellKind::Water));
    assert_eq!(grid.hit(Point::new(-1, 0)), None);
    assert!(!grid.all_ships_sunk());
    assert_eq!(grid.hit(Point::new(79, 39)), Some(CellKind::Ship));
    assert!(grid.ships()[0].is_sunk());
    assert!(grid.all_ships_sunk());
}

#[test]
fn test_with_max_attempts_floor() {
    assert_eq!(PlacementEngine::with_max_attempts(0).max_attempts(), 1);
    assert_eq!(
        PlacementEngine::default().max_attempts(),
        fleetgrid::MAX_PLACEMENT_ATTEMPTS
    );
}
