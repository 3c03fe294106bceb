//! Parsed mazes.
//!
//! A [`Maze`] is built from text where every character position is a
//! coordinate: `S` is the start, `E` the end, `#` an open path cell and a
//! blank is no cell at all. Lines need not share a width.
//!
//! ```text
//! S###
//!    #
//!  E##
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// A parsed maze: the set of present coordinates and their kinds.
///
/// Construction validates that exactly one start and one end exist, so
/// [`start`](Self::start) and [`end`](Self::end) are always keys of the maze.
/// A `Maze` is never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: HashMap<Point, CellKind>,
    start: Point,
    end: Point,
    size: Point,
}

impl Maze {
    /// Parse maze text.
    ///
    /// Lines end at `"\n"`, `"\r\n"` or a lone `'\r'`. Scanning stops at
    /// the first character outside `S`, `E`, `#` and blank. Endpoints are
    /// checked after the whole text has been read, start before end.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let mut cells = HashMap::new();
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let mut size = Point::ZERO;

        for (y, line) in text_lines(s).enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = match CellKind::from_char(ch) {
                    Ok(Some(kind)) => kind,
                    Ok(None) => continue,
                    Err(ch) => return Err(MazeError::InvalidCharacter { ch, pos }),
                };
                match kind {
                    CellKind::Start => starts.push(pos),
                    CellKind::End => ends.push(pos),
                    CellKind::Path => {}
                }
                size.x = size.x.max(pos.x + 1);
                size.y = size.y.max(pos.y + 1);
                cells.insert(pos, kind);
            }
        }

        let start = single_endpoint(&starts, CellKind::Start)?;
        let end = single_endpoint(&ends, CellKind::End)?;
        debug!(
            "parsed maze: {} cells, start {start}, end {end}, size {}x{}",
            cells.len(),
            size.x,
            size.y
        );
        Ok(Self {
            cells,
            start,
            end,
            size,
        })
    }

    /// Read the file at `path` and parse it.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily, so they surface as
    /// [`MazeError::InvalidCharacter`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| MazeError::FileNotFound {
            path: path.display().to_string(),
            kind: e.kind(),
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// The kind of the cell at `p`, or `None` if `p` is blank or outside the
    /// maze text.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.cells.get(&p).copied()
    }

    /// Whether `p` is a present cell.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains_key(&p)
    }

    /// The unique start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The unique end coordinate.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Number of present cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a parsed maze; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box size: `(max x + 1, max y + 1)` over all present cells.
    ///
    /// This is not a cell count; blanks inside the box are included.
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// The bounding box as a range anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }

    /// Iterate over `(Point, CellKind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.cells.iter().map(|(&p, &k)| (p, k))
    }

    /// All cells sorted by column, then row.
    pub fn sorted_cells(&self) -> Vec<(Point, CellKind)> {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort_unstable_by_key(|&(p, _)| p);
        cells
    }
}

// Splits on any of the three line break conventions. Text after the last
// break is a final line, possibly empty.
fn text_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(s);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\r', '\n']) {
            Some(i) => {
                let skip = if text[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[i + skip..]);
                Some(&text[..i])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

fn single_endpoint(found: &[Point], kind: CellKind) -> Result<Point, MazeError> {
    match found {
        [p] => Ok(*p),
        [] => Err(MazeError::MissingEndpoint { kind }),
        _ => Err(match kind {
            CellKind::End => MazeError::DuplicateEnd { count: found.len() },
            _ => MazeError::DuplicateStart { count: found.len() },
        }),
    }
}

/// Errors that can occur when loading or parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The maze file could not be read.
    FileNotFound { path: String, kind: io::ErrorKind },
    /// A character other than `S`, `E`, `#` or blank was found.
    InvalidCharacter { ch: char, pos: Point },
    /// More than one `S`.
    DuplicateStart { count: usize },
    /// More than one `E`.
    DuplicateEnd { count: usize },
    /// No `S` or no `E`; `kind` names the first one found missing.
    MissingEndpoint { kind: CellKind },
}

impl MazeError {
    /// The one-line message shown to the user for this error.
    ///
    /// Unlike [`Display`](fmt::Display), this keeps the fixed user-facing
    /// wording: both missing-endpoint cases share a message and an invalid
    /// character is not echoed back.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::FileNotFound { path, .. } => format!("ERROR: Could not open file: {path}"),
            Self::InvalidCharacter { .. } => "ERROR: Invalid character in the map".to_string(),
            Self::DuplicateStart { .. } => {
                "ERROR: The map has more than one START position".to_string()
            }
            Self::DuplicateEnd { .. } => "ERROR: The map has more than one END position".to_string(),
            Self::MissingEndpoint { .. } => {
                "ERROR: Every map needs exactly one START and exactly one END position".to_string()
            }
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path, kind } => write!(f, "maze: cannot read {path}: {kind}"),
            Self::InvalidCharacter { ch, pos } => {
                write!(f, "maze contains invalid character {ch:?} at {pos}")
            }
            Self::DuplicateStart { count } => write!(f, "maze has {count} START positions"),
            Self::DuplicateEnd { count } => write!(f, "maze has {count} END positions"),
            Self::MissingEndpoint { kind } => write!(f, "maze has no {kind} position"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
S###
   #
 E##";

    #[test]
    fn single_row() {
        let m = Maze::parse("S#E").unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.kind(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(m.kind(Point::new(1, 0)), Some(CellKind::Path));
        assert_eq!(m.kind(Point::new(2, 0)), Some(CellKind::End));
        assert_eq!(m.start(), Point::new(0, 0));
        assert_eq!(m.end(), Point::new(2, 0));
        assert_eq!(m.size(), Point::new(3, 1));
    }

    #[test]
    fn blanks_are_not_stored() {
        let m = Maze::parse(CORRIDOR).unwrap();
        let non_blank = CORRIDOR.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(m.len(), non_blank);
        assert!(!m.contains(Point::new(0, 1)));
        assert_eq!(m.kind(Point::new(0, 2)), None);
        assert_eq!(m.kind(Point::new(3, 1)), Some(CellKind::Path));
    }

    #[test]
    fn ragged_lines_and_trailing_newline() {
        let m = Maze::parse("S\n###\n  E\n").unwrap();
        assert_eq!(m.size(), Point::new(3, 3));
        assert_eq!(m.len(), 5);
        assert!(!m.contains(Point::new(1, 0)));
    }

    #[test]
    fn crlf_line_breaks() {
        let m = Maze::parse("S#\r\n E\r\n").unwrap();
        assert_eq!(m.end(), Point::new(1, 1));
        assert_eq!(m.size(), Point::new(2, 2));
    }

    #[test]
    fn lone_carriage_return_breaks_lines() {
        let m = Maze::parse("S#\r E").unwrap();
        assert_eq!(m.start(), Point::new(0, 0));
        assert_eq!(m.end(), Point::new(1, 1));
        assert_eq!(m.size(), Point::new(2, 2));

        let mixed = Maze::parse("S#\r\r\n#\n E").unwrap();
        assert_eq!(mixed.end(), Point::new(1, 3));
        assert_eq!(mixed.kind(Point::new(0, 2)), Some(CellKind::Path));
    }

    #[test]
    fn text_lines_conventions() {
        let lines: Vec<_> = text_lines("a\nb\r\nc\rd\r\n").collect();
        assert_eq!(lines, ["a", "b", "c", "d", ""]);
        assert_eq!(text_lines("").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn size_is_bounding_box_not_count() {
        let m = Maze::parse("S   \n\n    E").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.size(), Point::new(5, 3));
        assert_eq!(m.bounds(), Range::new(0, 0, 5, 3));
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(Maze::parse(CORRIDOR), Maze::parse(CORRIDOR));
    }

    #[test]
    fn sorted_cells_by_column_then_row() {
        let m = Maze::parse("S#\n#E").unwrap();
        let order: Vec<_> = m.sorted_cells().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1),
            ]
        );
    }

    #[test]
    fn invalid_character() {
        let err = Maze::parse("S#\n#X#E").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidCharacter {
                ch: 'X',
                pos: Point::new(1, 1),
            }
        );
        assert_eq!(err.diagnostic(), "ERROR: Invalid character in the map");
    }

    #[test]
    fn invalid_character_wins_over_endpoint_errors() {
        let err = Maze::parse("SS.").unwrap_err();
        assert!(matches!(err, MazeError::InvalidCharacter { ch: '.', .. }));
    }

    #[test]
    fn duplicate_start() {
        let err = Maze::parse("S#S\n##E").unwrap_err();
        assert_eq!(err, MazeError::DuplicateStart { count: 2 });
        assert_eq!(
            err.diagnostic(),
            "ERROR: The map has more than one START position"
        );
    }

    #[test]
    fn duplicate_end() {
        let err = Maze::parse("S#E\nE#E").unwrap_err();
        assert_eq!(err, MazeError::DuplicateEnd { count: 3 });
        assert_eq!(err.diagnostic(), "ERROR: The map has more than one END position");
    }

    #[test]
    fn missing_endpoints_share_a_message() {
        let no_start = Maze::parse("##E").unwrap_err();
        let no_end = Maze::parse("S##").unwrap_err();
        assert_eq!(
            no_start,
            MazeError::MissingEndpoint {
                kind: CellKind::Start
            }
        );
        assert_eq!(no_end, MazeError::MissingEndpoint { kind: CellKind::End });
        assert_eq!(no_start.diagnostic(), no_end.diagnostic());
        assert_eq!(
            no_start.diagnostic(),
            "ERROR: Every map needs exactly one START and exactly one END position"
        );
    }

    #[test]
    fn start_checked_before_end() {
        // Two starts and no end: the start problem is reported.
        let err = Maze::parse("S#S").unwrap_err();
        assert_eq!(err, MazeError::DuplicateStart { count: 2 });
        // No start and two ends: the missing start is reported.
        let err = Maze::parse("E#E").unwrap_err();
        assert_eq!(
            err,
            MazeError::MissingEndpoint {
                kind: CellKind::Start
            }
        );
    }

    #[test]
    fn empty_text_has_no_endpoints() {
        assert!(matches!(
            Maze::parse(""),
            Err(MazeError::MissingEndpoint { .. })
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = Maze::load("definitely/not/a/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::FileNotFound { .. }));
        assert_eq!(
            err.diagnostic(),
            "ERROR: Could not open file: definitely/not/a/maze.txt"
        );
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("mazetree-core-{}.txt", std::process::id()));
        fs::write(&path, "S#\n E\n").unwrap();
        let m = Maze::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(m, Maze::parse("S#\n E").unwrap());
    }

    #[test]
    fn display_carries_detail() {
        let err = MazeError::InvalidCharacter {
            ch: 'X',
            pos: Point::new(2, 0),
        };
        assert_eq!(err.to_string(), "maze contains invalid character 'X' at (2, 0)");
        let err = MazeError::MissingEndpoint { kind: CellKind::End };
        assert_eq!(err.to_string(), "maze has no END position");
    }
}
