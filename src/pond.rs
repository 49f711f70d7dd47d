use core::fmt;
use std::str::FromStr;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The six neighbour directions of a hexagon in axial coordinates, indexed clockwise starting
/// from [HexDirection::North]. Opposite directions differ by three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    pub fn num(self) -> usize {
        self as usize
    }

    pub fn from_num(num: usize) -> HexDirection {
        Self::ALL[num % 6]
    }

    pub fn opposite(self) -> HexDirection {
        Self::from_num(self.num() + 3)
    }

    /// Offset to the neighbouring hexagon, with `x` as the axial column and `y` as the row.
    pub fn offset(self) -> Point {
        match self {
            HexDirection::North => Point::new(0, -1),
            HexDirection::NorthEast => Point::new(1, -1),
            HexDirection::SouthEast => Point::new(1, 0),
            HexDirection::South => Point::new(0, 1),
            HexDirection::SouthWest => Point::new(-1, 1),
            HexDirection::NorthWest => Point::new(-1, 0),
        }
    }

    pub fn step(self, point: Point) -> Point {
        let offset = self.offset();
        Point::new(point.x + offset.x, point.y + offset.y)
    }
}

/// What occupies a hexagon of the pond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Start,
    End,
    Water,
    Mud,
    Reeds,
    LilyPad,
    Alligator,
    Food { flies: u32 },
}

impl Terrain {
    /// Map symbol of the terrain. Food is written as its fly count; counts above nine print as
    /// `9`.
    pub fn symbol(self) -> char {
        match self {
            Terrain::Start => 'S',
            Terrain::End => 'E',
            Terrain::Water => 'W',
            Terrain::Mud => 'M',
            Terrain::Reeds => 'R',
            Terrain::LilyPad => 'L',
            Terrain::Alligator => 'A',
            Terrain::Food { flies } => char::from_digit(flies.min(9), 10).unwrap_or('9'),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Terrain> {
        Some(match symbol {
            'S' => Terrain::Start,
            'E' => Terrain::End,
            'W' => Terrain::Water,
            'M' => Terrain::Mud,
            'R' => Terrain::Reeds,
            'L' => Terrain::LilyPad,
            'A' => Terrain::Alligator,
            '0'..='9' => Terrain::Food {
                flies: symbol.to_digit(10)?,
            },
            _ => return None,
        })
    }
}

/// Position of a cell in the [Pond] arena. Cells are numbered in insertion order and are never
/// removed, so an id stays valid for the lifetime of its pond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Search state of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Clear,
    /// On the current path stack.
    InPath,
    /// Backtracked out of; not entered again during the same search.
    Exited,
}

#[derive(Clone, Debug)]
struct Cell {
    terrain: Terrain,
    mark: Mark,
    neighbours: [Option<CellId>; 6],
}

impl Cell {
    fn new(terrain: Terrain) -> Cell {
        Cell {
            terrain,
            mark: Mark::Clear,
            neighbours: [None; 6],
        }
    }
}

/// Errors produced when parsing a pond from its text form. `row` is the zero-based line number
/// in the text, blank lines included; `column` counts non-whitespace characters on that line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PondError {
    /// The map contains no cells at all.
    Empty,
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
    MissingStart,
    DuplicateStart {
        row: usize,
        column: usize,
    },
    MissingEnd,
}

impl fmt::Display for PondError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PondError::Empty => write!(f, "pond map contains no cells"),
            PondError::UnknownSymbol {
                row,
                column,
                symbol,
            } => write!(f, "unknown symbol '{}' at row {}, column {}", symbol, row, column),
            PondError::MissingStart => write!(f, "pond map has no start cell"),
            PondError::DuplicateStart { row, column } => {
                write!(f, "second start cell at row {}, column {}", row, column)
            }
            PondError::MissingEnd => write!(f, "pond map has no end cell"),
        }
    }
}

impl std::error::Error for PondError {}

/// [Pond] is an arena of hexagonal cells keyed by their axial coordinate. The index of a cell in
/// the arena is its [CellId]; each cell records the ids of its six neighbours so the search
/// never has to hash a coordinate.
#[derive(Clone, Debug, Default)]
pub struct Pond {
    cells: FxIndexMap<Point, Cell>,
    start: Option<CellId>,
}

impl Pond {
    pub fn new() -> Pond {
        Pond::default()
    }

    /// Places a cell at `point` and links it with the cells around it. Inserting at an occupied
    /// point replaces the terrain and keeps the id and the mark.
    pub fn insert(&mut self, point: Point, terrain: Terrain) -> CellId {
        let id = match self.cells.get_index_of(&point) {
            Some(ix) => {
                if let Some(cell) = self.cell_mut(CellId(ix)) {
                    cell.terrain = terrain;
                }
                CellId(ix)
            }
            None => {
                let (ix, _) = self.cells.insert_full(point, Cell::new(terrain));
                self.update_neighbours(point, CellId(ix));
                CellId(ix)
            }
        };
        if terrain == Terrain::Start {
            self.start = Some(id);
        } else if self.start == Some(id) {
            self.start = None;
        }
        id
    }

    fn update_neighbours(&mut self, point: Point, id: CellId) {
        for dir in HexDirection::ALL {
            let Some(n_ix) = self.cells.get_index_of(&dir.step(point)) else {
                continue;
            };
            if let Some(cell) = self.cell_mut(id) {
                cell.neighbours[dir.num()] = Some(CellId(n_ix));
            }
            if let Some(neighbour) = self.cell_mut(CellId(n_ix)) {
                neighbour.neighbours[dir.opposite().num()] = Some(id);
            }
        }
    }

    fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get_index(id.0).map(|(_, cell)| cell)
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_index_mut(id.0).map(|(_, cell)| cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    pub fn cell_at(&self, point: Point) -> Option<CellId> {
        self.cells.get_index_of(&point).map(CellId)
    }

    pub fn position(&self, id: CellId) -> Option<Point> {
        self.cells.get_index(id.0).map(|(point, _)| *point)
    }

    /// All cell ids in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    pub fn terrain(&self, id: CellId) -> Option<Terrain> {
        self.cell(id).map(|cell| cell.terrain)
    }

    pub fn neighbour(&self, id: CellId, dir: HexDirection) -> Option<CellId> {
        self.cell(id).and_then(|cell| cell.neighbours[dir.num()])
    }

    pub fn neighbours(&self, id: CellId) -> impl Iterator<Item = (HexDirection, CellId)> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbour(id, dir).map(|n| (dir, n)))
    }

    fn has_terrain(&self, id: CellId, terrain: Terrain) -> bool {
        self.terrain(id) == Some(terrain)
    }

    pub fn is_start(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::Start)
    }
    pub fn is_end(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::End)
    }
    pub fn is_water(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::Water)
    }
    pub fn is_mud(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::Mud)
    }
    pub fn is_reeds(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::Reeds)
    }
    pub fn is_lily_pad(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::LilyPad)
    }
    pub fn is_alligator(&self, id: CellId) -> bool {
        self.has_terrain(id, Terrain::Alligator)
    }

    /// Checks whether any of the six neighbours of a cell holds an alligator.
    pub fn predator_adjacent(&self, id: CellId) -> bool {
        self.neighbours(id).any(|(_, n)| self.is_alligator(n))
    }

    /// Number of flies on a food cell, zero for every other terrain.
    pub fn num_flies(&self, id: CellId) -> u32 {
        match self.terrain(id) {
            Some(Terrain::Food { flies }) => flies,
            _ => 0,
        }
    }

    /// Empties a food cell and returns how many flies it held.
    pub fn remove_flies(&mut self, id: CellId) -> u32 {
        match self.cell_mut(id) {
            Some(Cell {
                terrain: Terrain::Food { flies },
                ..
            }) => std::mem::take(flies),
            _ => 0,
        }
    }

    pub fn mark(&self, id: CellId) -> Mark {
        self.cell(id).map(|cell| cell.mark).unwrap_or_default()
    }

    /// Checks if a cell is on the current path stack.
    pub fn is_marked(&self, id: CellId) -> bool {
        self.mark(id) == Mark::InPath
    }

    pub fn is_exited(&self, id: CellId) -> bool {
        self.mark(id) == Mark::Exited
    }

    pub fn mark_in_stack(&mut self, id: CellId) {
        self.set_mark(id, Mark::InPath);
    }

    pub fn mark_out_stack(&mut self, id: CellId) {
        self.set_mark(id, Mark::Exited);
    }

    fn set_mark(&mut self, id: CellId, mark: Mark) {
        if let Some(cell) = self.cell_mut(id) {
            cell.mark = mark;
        }
    }

    /// Clears every mark so the pond can be searched again. Eaten flies stay eaten.
    pub fn reset_marks(&mut self) {
        for cell in self.cells.values_mut() {
            cell.mark = Mark::Clear;
        }
    }
}

/// Parses the text form of a pond. Every non-blank line is a row; the n-th non-whitespace
/// character of the r-th non-blank line is the cell at axial coordinate (n, r). `.` leaves a
/// hole.
impl FromStr for Pond {
    type Err = PondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pond = Pond::new();
        let mut has_end = false;
        let lines = s.lines().enumerate();
        let rows = lines.filter(|(_, line)| !line.trim().is_empty());
        for (r, (row, line)) in rows.enumerate() {
            let symbols = line.chars().filter(|c| !c.is_whitespace());
            for (column, symbol) in symbols.enumerate() {
                if symbol == '.' {
                    continue;
                }
                let terrain = Terrain::from_symbol(symbol).ok_or(PondError::UnknownSymbol {
                    row,
                    column,
                    symbol,
                })?;
                match terrain {
                    Terrain::Start if pond.start.is_some() => {
                        return Err(PondError::DuplicateStart { row, column })
                    }
                    Terrain::End => has_end = true,
                    _ => {}
                }
                pond.insert(Point::new(column as i32, r as i32), terrain);
            }
        }
        if pond.is_empty() {
            Err(PondError::Empty)
        } else if pond.start.is_none() {
            Err(PondError::MissingStart)
        } else if !has_end {
            Err(PondError::MissingEnd)
        } else {
            Ok(pond)
        }
    }
}

impl fmt::Display for Pond {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(first) = self.cells.keys().next() else {
            return Ok(());
        };
        let (mut min, mut max) = (*first, *first);
        for p in self.cells.keys() {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        for y in min.y..=max.y {
            let row = (min.x..=max.x)
                .map(|x| match self.cells.get(&Point::new(x, y)) {
                    Some(cell) => cell.terrain.symbol(),
                    None => '.',
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
