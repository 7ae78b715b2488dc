//! # VecKit Path
//!
//! Parser and interpreter for the SVG path mini-language (the `d` attribute).
//!
//! ## Features
//!
//! - **Tokenizer**: splits raw path data into command groups
//! - **Command builder**: typed [`PathCommand`] values with enforced arity,
//!   implicit repetition expanded
//! - **Interpreter**: replays a [`PathProgram`] against a
//!   [`DrawingContext`], handling smooth-curve reflection and elliptical
//!   arc parameterization
//!
//! ## Architecture
//!
//! ```text
//! "M10 10 c20,0 20,20 0,20 z"
//!    └── tokenize ──> CommandGroup list
//!           └── build ──> PathProgram (Vec<PathCommand>)
//!                  └── interpret ──> DrawingContext calls
//! ```
//!
//! Parsing is strict: a malformed group fails the whole path and no partial
//! program is returned. Interpretation is strictly sequential; each command
//! may depend on the immediately preceding one (smooth curves) and on the
//! sink's pen position (relative coordinates).

use thiserror::Error;
use tracing::warn;
use veckit_canvas::DrawingContext;
use veckit_geometry::{endpoint_to_center, ArcGeometry, Point};

// ==================== Errors ====================

/// Errors that can occur while parsing path data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("invalid number `{token}` in `{letter}` command group")]
    InvalidNumber { letter: char, token: String },

    #[error("`{letter}` command expects {arity} arguments per instance, got {count}")]
    WrongArgumentCount { letter: char, arity: usize, count: usize },

    #[error("unknown path command `{0}`")]
    UnknownCommand(char),

    #[error("path data has arguments before any command letter")]
    MissingCommand,
}

// ==================== Tokenizer ====================

/// A command letter with its raw argument tokens, before typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub letter: char,
    pub args: Vec<String>,
}

/// Insert separators so that loosely packed path data splits on whitespace.
///
/// Commas become spaces, every letter is isolated (a letter both ends the
/// previous numeric token and starts a group), and a `-` always begins a new
/// token so that `10-10` separates into two numbers.
fn separate_tokens(data: &str) -> String {
    let mut separated = String::with_capacity(data.len() + 8);
    for ch in data.chars() {
        match ch {
            ',' => separated.push(' '),
            '-' => {
                separated.push(' ');
                separated.push('-');
            }
            c if c.is_ascii_alphabetic() => {
                separated.push(' ');
                separated.push(c);
                separated.push(' ');
            }
            c => separated.push(c),
        }
    }
    separated
}

/// Split raw path data into command groups.
///
/// A new group starts at every alphabetic character; everything else is
/// argument material for the current group, which is how implicit command
/// repetition stays attached to its letter. Leading or trailing whitespace
/// produces no groups.
pub fn tokenize(data: &str) -> Result<Vec<CommandGroup>, PathError> {
    let separated = separate_tokens(data);
    let mut groups: Vec<CommandGroup> = Vec::new();

    for token in separated.split_whitespace() {
        let is_letter = token.len() == 1
            && token.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if is_letter {
            groups.push(CommandGroup {
                letter: token.chars().next().unwrap(),
                args: Vec::new(),
            });
        } else {
            match groups.last_mut() {
                Some(group) => group.args.push(token.to_string()),
                None => return Err(PathError::MissingCommand),
            }
        }
    }

    Ok(groups)
}

// ==================== Commands ====================

/// Whether a command's coordinates are absolute or offsets from the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordMode {
    Absolute,
    Relative,
}

impl CoordMode {
    /// Derive the mode from the command letter's case.
    pub fn from_letter(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            CoordMode::Absolute
        } else {
            CoordMode::Relative
        }
    }
}

/// One typed path command.
///
/// Arity and point grouping are enforced by construction; arc flags are kept
/// as the raw parsed numbers and validated when the command is drawn
/// (permissive parse, strict draw).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { mode: CoordMode, to: Point },
    LineTo { mode: CoordMode, to: Point },
    HorizontalTo { mode: CoordMode, x: f32 },
    VerticalTo { mode: CoordMode, y: f32 },
    Close,
    CubicTo { mode: CoordMode, c1: Point, c2: Point, to: Point },
    SmoothCubicTo { mode: CoordMode, c2: Point, to: Point },
    QuadTo { mode: CoordMode, c: Point, to: Point },
    SmoothQuadTo { mode: CoordMode, to: Point },
    Arc {
        mode: CoordMode,
        rx: f32,
        ry: f32,
        /// X-axis rotation in degrees, as written in the source.
        rotation: f32,
        /// Raw large-arc flag; must be exactly 0 or 1 to draw.
        large_arc: f32,
        /// Raw sweep flag; must be exactly 0 or 1 to draw.
        sweep: f32,
        to: Point,
    },
}

/// An ordered, immutable sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProgram {
    commands: Vec<PathCommand>,
}

impl PathProgram {
    /// Parse raw `d` attribute data into a program.
    ///
    /// Implicit repetition groups expand into separate commands sharing the
    /// originating letter and coordinate mode. Any malformed group fails the
    /// whole parse.
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let mut commands = Vec::new();
        for group in tokenize(data)? {
            build_group(&group, &mut commands)?;
        }
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the program against a drawing context.
    ///
    /// See [`interpret`].
    pub fn interpret(&self, ctx: &mut dyn DrawingContext) {
        interpret(self, ctx);
    }
}

// ==================== Command Builder ====================

fn parse_number(letter: char, token: &str) -> Result<f32, PathError> {
    // Stray commas or spaces can survive loose separation.
    let cleaned = token.trim_matches(|c| c == ',' || c == ' ');
    cleaned.parse::<f32>().map_err(|_| PathError::InvalidNumber {
        letter,
        token: token.to_string(),
    })
}

/// Split a group's arguments into fixed-arity instances.
fn instances(letter: char, args: &[f32], arity: usize) -> Result<std::slice::ChunksExact<'_, f32>, PathError> {
    if args.is_empty() || args.len() % arity != 0 {
        return Err(PathError::WrongArgumentCount {
            letter,
            arity,
            count: args.len(),
        });
    }
    Ok(args.chunks_exact(arity))
}

/// Convert one raw group into typed commands, expanding implicit repetition.
fn build_group(group: &CommandGroup, commands: &mut Vec<PathCommand>) -> Result<(), PathError> {
    let letter = group.letter;
    let mode = CoordMode::from_letter(letter);
    let args = group
        .args
        .iter()
        .map(|token| parse_number(letter, token))
        .collect::<Result<Vec<f32>, PathError>>()?;

    match letter.to_ascii_lowercase() {
        'm' => {
            for pair in instances(letter, &args, 2)? {
                commands.push(PathCommand::MoveTo { mode, to: Point::new(pair[0], pair[1]) });
            }
        }
        'l' => {
            for pair in instances(letter, &args, 2)? {
                commands.push(PathCommand::LineTo { mode, to: Point::new(pair[0], pair[1]) });
            }
        }
        'h' => {
            for arg in instances(letter, &args, 1)? {
                commands.push(PathCommand::HorizontalTo { mode, x: arg[0] });
            }
        }
        'v' => {
            for arg in instances(letter, &args, 1)? {
                commands.push(PathCommand::VerticalTo { mode, y: arg[0] });
            }
        }
        'z' => {
            if !args.is_empty() {
                return Err(PathError::WrongArgumentCount {
                    letter,
                    arity: 0,
                    count: args.len(),
                });
            }
            commands.push(PathCommand::Close);
        }
        'c' => {
            for set in instances(letter, &args, 6)? {
                commands.push(PathCommand::CubicTo {
                    mode,
                    c1: Point::new(set[0], set[1]),
                    c2: Point::new(set[2], set[3]),
                    to: Point::new(set[4], set[5]),
                });
            }
        }
        's' => {
            for set in instances(letter, &args, 4)? {
                commands.push(PathCommand::SmoothCubicTo {
                    mode,
                    c2: Point::new(set[0], set[1]),
                    to: Point::new(set[2], set[3]),
                });
            }
        }
        'q' => {
            for set in instances(letter, &args, 4)? {
                commands.push(PathCommand::QuadTo {
                    mode,
                    c: Point::new(set[0], set[1]),
                    to: Point::new(set[2], set[3]),
                });
            }
        }
        't' => {
            for pair in instances(letter, &args, 2)? {
                commands.push(PathCommand::SmoothQuadTo { mode, to: Point::new(pair[0], pair[1]) });
            }
        }
        'a' => {
            for set in instances(letter, &args, 7)? {
                commands.push(PathCommand::Arc {
                    mode,
                    rx: set[0],
                    ry: set[1],
                    rotation: set[2],
                    large_arc: set[3],
                    sweep: set[4],
                    to: Point::new(set[5], set[6]),
                });
            }
        }
        _ => return Err(PathError::UnknownCommand(letter)),
    }

    Ok(())
}

// ==================== Interpreter ====================

/// A command that has already executed, paired with the pen position it
/// started from. Reflection math for chained relative curves reconstructs
/// absolute control points from this record.
#[derive(Debug, Clone, Copy)]
struct ExecutedCommand {
    command: PathCommand,
    start: Point,
}

/// Per-interpretation state. Created fresh for every program, never shared.
#[derive(Debug)]
struct InterpreterState {
    previous: Option<ExecutedCommand>,
    /// Control point synthesized by the most recent smooth-quadratic command.
    /// Consecutive `T`/`t` commands chain through it because they carry no
    /// explicit control point to reflect.
    last_quad_control: Point,
}

/// Replay `program` against `ctx`, issuing primitive drawing calls.
///
/// The context's pen position is read before each command so that relative
/// coordinates and smooth-curve reflections are computed against ground
/// truth. Arc commands with flag values other than 0 or 1 are skipped with a
/// warning; interpretation continues with the next command.
pub fn interpret(program: &PathProgram, ctx: &mut dyn DrawingContext) {
    let mut state = InterpreterState {
        previous: None,
        last_quad_control: ctx.current_point(),
    };

    for &command in program.commands() {
        let start = ctx.current_point();
        execute(ctx, command, &mut state);
        state.previous = Some(ExecutedCommand { command, start });
    }
}

fn execute(ctx: &mut dyn DrawingContext, command: PathCommand, state: &mut InterpreterState) {
    match command {
        PathCommand::MoveTo { mode, to } => match mode {
            CoordMode::Absolute => ctx.move_to(to.x, to.y),
            CoordMode::Relative => ctx.rel_move_to(to.x, to.y),
        },
        PathCommand::LineTo { mode, to } => match mode {
            CoordMode::Absolute => ctx.line_to(to.x, to.y),
            CoordMode::Relative => ctx.rel_line_to(to.x, to.y),
        },
        PathCommand::HorizontalTo { mode, x } => match mode {
            CoordMode::Absolute => {
                let current = ctx.current_point();
                ctx.line_to(x, current.y);
            }
            CoordMode::Relative => ctx.rel_line_to(x, 0.0),
        },
        PathCommand::VerticalTo { mode, y } => match mode {
            CoordMode::Absolute => {
                let current = ctx.current_point();
                ctx.line_to(current.x, y);
            }
            CoordMode::Relative => ctx.rel_line_to(0.0, y),
        },
        PathCommand::Close => ctx.close_path(),
        PathCommand::CubicTo { mode, c1, c2, to } => match mode {
            CoordMode::Absolute => ctx.curve_to(c1, c2, to),
            CoordMode::Relative => ctx.rel_curve_to(c1, c2, to),
        },
        // A quadratic is drawn as a cubic with both control points equal to
        // its single control point; the cubic is the one curve primitive the
        // sink provides.
        PathCommand::QuadTo { mode, c, to } => match mode {
            CoordMode::Absolute => ctx.curve_to(c, c, to),
            CoordMode::Relative => ctx.rel_curve_to(c, c, to),
        },
        PathCommand::SmoothCubicTo { mode, c2, to } => smooth_cubic(ctx, state, mode, c2, to),
        PathCommand::SmoothQuadTo { mode, to } => smooth_quad(ctx, state, mode, to),
        PathCommand::Arc { mode, rx, ry, rotation, large_arc, sweep, to } => {
            arc(ctx, mode, rx, ry, rotation, large_arc, sweep, to);
        }
    }
}

/// Absolute position of a previous curve command's last control point.
fn absolute_control(mode: CoordMode, control: Point, start: Point) -> Point {
    match mode {
        CoordMode::Absolute => control,
        CoordMode::Relative => start + control,
    }
}

fn smooth_cubic(
    ctx: &mut dyn DrawingContext,
    state: &InterpreterState,
    mode: CoordMode,
    c2: Point,
    to: Point,
) {
    let current = ctx.current_point();

    // The first control point reflects the previous cubic's second control
    // point through the pen. Without a cubic predecessor the tangent is
    // zero-length: the control point collapses onto the pen.
    let first_control = match state.previous {
        Some(prev) => match prev.command {
            PathCommand::CubicTo { mode, c2, .. }
            | PathCommand::SmoothCubicTo { mode, c2, .. } => {
                absolute_control(mode, c2, prev.start).reflect_through(current)
            }
            _ => current,
        },
        None => current,
    };

    match mode {
        CoordMode::Absolute => ctx.curve_to(first_control, c2, to),
        CoordMode::Relative => ctx.rel_curve_to(first_control - current, c2, to),
    }
}

fn smooth_quad(
    ctx: &mut dyn DrawingContext,
    state: &mut InterpreterState,
    mode: CoordMode,
    to: Point,
) {
    let current = ctx.current_point();

    // A quadratic predecessor supplies the point to reflect: its explicit
    // control point, or the control the previous smooth-quadratic itself
    // synthesized.
    let reflected = match state.previous {
        Some(prev) => match prev.command {
            PathCommand::QuadTo { mode, c, .. } => {
                Some(absolute_control(mode, c, prev.start))
            }
            PathCommand::SmoothQuadTo { .. } => Some(state.last_quad_control),
            _ => None,
        },
        None => None,
    };

    match reflected {
        Some(prev_control) => {
            let control = prev_control.reflect_through(current);
            state.last_quad_control = control;
            match mode {
                CoordMode::Absolute => ctx.curve_to(control, control, to),
                CoordMode::Relative => {
                    let rel = control - current;
                    ctx.rel_curve_to(rel, rel, to);
                }
            }
        }
        // No quadratic to continue: degrade to a straight line. The carried
        // control still resets to the pen position the line started from, so
        // a following smooth-quadratic reflects that instead of a stale
        // point.
        None => {
            state.last_quad_control = current;
            match mode {
                CoordMode::Absolute => ctx.line_to(to.x, to.y),
                CoordMode::Relative => ctx.rel_line_to(to.x, to.y),
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn arc(
    ctx: &mut dyn DrawingContext,
    mode: CoordMode,
    rx: f32,
    ry: f32,
    rotation: f32,
    large_arc: f32,
    sweep: f32,
    to: Point,
) {
    let current = ctx.current_point();
    // The arc math works relative to the start point.
    let end = match mode {
        CoordMode::Absolute => to - current,
        CoordMode::Relative => to,
    };

    // Degenerate radii collapse to a straight line before flag validation.
    if rx == 0.0 || ry == 0.0 {
        ctx.rel_line_to(end.x, end.y);
        return;
    }

    let valid_flag = |flag: f32| flag == 0.0 || flag == 1.0;
    if !valid_flag(large_arc) || !valid_flag(sweep) {
        warn!(large_arc, sweep, "arc flags must be 0 or 1, skipping command");
        return;
    }

    let geometry = endpoint_to_center(
        end,
        rx,
        ry,
        rotation.to_radians(),
        large_arc == 1.0,
        sweep == 1.0,
    );

    match geometry {
        ArcGeometry::Line(line_end) => ctx.rel_line_to(line_end.x, line_end.y),
        ArcGeometry::Arc(arc) => {
            // Draw the unit-frame circle inside a scoped transform so later
            // commands see an untouched context.
            ctx.save();
            ctx.translate(current.x, current.y);
            ctx.rotate(arc.rotation);
            ctx.scale(1.0, arc.radius_ratio);
            if sweep == 1.0 {
                ctx.arc(arc.center, arc.radius, arc.start_angle, arc.end_angle);
            } else {
                ctx.arc_negative(arc.center, arc.radius, arc.start_angle, arc.end_angle);
            }
            ctx.restore();
        }
    }
}
