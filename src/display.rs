/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer, the terminal size and an
/// immutable `GameSnapshot`.  No game logic is performed; this module only
/// scales playfield pixels onto terminal cells and emits terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_game::entities::{Obstacle, PowerUpKind, Star};
use space_game::{GameSnapshot, Level, Phase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_TIME: Color = Color::White;
const C_PLAYER: Color = Color::White;
const C_SHIELD: Color = Color::Green;
const C_PROJECTILE: Color = Color::Green;
const C_POWERUP_HEALTH: Color = Color::Magenta;
const C_POWERUP_TIME: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// One glyph + colour per obstacle sprite variant.
const OBSTACLE_SPRITES: &[(&str, Color)] = &[
    ("(@)", Color::Red),
    ("{#}", Color::DarkYellow),
    ("<%>", Color::Magenta),
    ("[&]", Color::Green),
];

// ── Pixel → cell mapping ──────────────────────────────────────────────────────

/// Terminal area the playfield is squeezed into: everything inside the
/// border, which sits on rows 1 and `rows - 2`.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: i32,
    field_h: i32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, snap: &GameSnapshot) -> Self {
        Self {
            cols,
            rows,
            field_w: snap.width.max(1),
            field_h: snap.height.max(1),
        }
    }

    fn inner_cols(&self) -> i32 {
        (self.cols as i32 - 2).max(1)
    }

    fn inner_rows(&self) -> i32 {
        (self.rows as i32 - 4).max(1)
    }

    /// Cell for a playfield point, or `None` when it falls outside the border.
    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.field_w || y >= self.field_h {
            return None;
        }
        let col = 1 + x * self.inner_cols() / self.field_w;
        let row = 2 + y * self.inner_rows() / self.field_h;
        Some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &GameSnapshot) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, snap);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match snap.phase {
        Phase::LevelSelect => draw_level_select(out, &view)?,
        Phase::Playing => {
            draw_border(out, &view)?;
            draw_hud(out, &view, snap)?;
            for star in &snap.stars {
                draw_star(out, &view, star)?;
            }
            for obstacle in &snap.obstacles {
                draw_obstacle(out, &view, obstacle)?;
            }
            draw_power_up(out, &view, snap)?;
            draw_projectile(out, &view, snap)?;
            draw_player(out, &view, snap)?;
            draw_controls_hint(out, &view)?;
        }
        Phase::GameOver => draw_game_over(out, &view, snap)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, snap: &GameSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", snap.score)))?;

    let (level_str, level_color) = match snap.level {
        Some(Level::Easy) => ("[ EASY ]", Color::Green),
        Some(Level::Hard) => ("[ HARD ]", Color::Red),
        None => ("", C_HINT),
    };
    let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(level_color))?;
    out.queue(Print(level_str))?;

    let shield_tag = if snap.player.shield_active {
        "[SHIELD] "
    } else {
        ""
    };
    let time_tag = match snap.remaining_time {
        Some(t) => format!("Time:{:>3}s ", t),
        None => String::new(),
    };
    let health_tag = format!("Health:{}", snap.health);
    let right_len = shield_tag.chars().count() + time_tag.chars().count() + health_tag.len();
    let rx = view.cols.saturating_sub(right_len as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;

    if !shield_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_SHIELD))?;
        out.queue(Print(shield_tag))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(&time_tag))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_tag))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_star<W: Write>(out: &mut W, view: &Viewport, star: &Star) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(star.x, star.y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(Color::Rgb {
            r: star.color.r,
            g: star.color.g,
            b: star.color.b,
        }))?;
        out.queue(Print("·"))?;
    }
    Ok(())
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    view: &Viewport,
    obstacle: &Obstacle,
) -> std::io::Result<()> {
    // Obstacles spawn above the top edge; draw them once their top is inside.
    if let Some((col, row)) = view.cell(obstacle.x, obstacle.y) {
        let (glyph, color) = OBSTACLE_SPRITES[obstacle.sprite as usize % OBSTACLE_SPRITES.len()];
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_power_up<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &GameSnapshot,
) -> std::io::Result<()> {
    let Some(power_up) = snap.power_up else {
        return Ok(());
    };
    if let Some((col, row)) = view.cell(power_up.x, power_up.y) {
        let (glyph, color) = match power_up.kind {
            PowerUpKind::Health => ("♥", C_POWERUP_HEALTH),
            PowerUpKind::Time => ("⧗", C_POWERUP_TIME),
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &GameSnapshot,
) -> std::io::Result<()> {
    if let Some(p) = snap.projectile {
        if let Some((col, row)) = view.cell(p.x, p.y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_PROJECTILE))?;
            out.queue(Print("║"))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, snap: &GameSnapshot) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols), anchored at the ship's horizontal centre:
    //   ▲
    //  /█\
    let p = &snap.player;
    let Some((col, row)) = view.cell(p.x + p.width / 2, p.y) else {
        return Ok(());
    };
    let color = if p.shield_active { C_SHIELD } else { C_PLAYER };
    out.queue(style::SetForegroundColor(color))?;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    let wing_row = row + 1;
    if wing_row < view.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), wing_row))?;
        out.queue(Print(if p.shield_active { "(█)" } else { "/█\\" }))?;
    }

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   S : Shield   Q : Quit"))?;
    Ok(())
}

// ── Full-screen menus ─────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_level_select<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let lines = [
        ("★  SPACE  GAME  ★".to_string(), Color::Cyan),
        (String::new(), C_HINT),
        ("Select Level:".to_string(), Color::White),
        ("1 - Easy".to_string(), Color::Green),
        ("2 - Hard".to_string(), Color::Red),
        (String::new(), C_HINT),
        ("← → / A D : Move   SPACE : Shoot   S : Shield".to_string(), C_HINT),
        ("Q : Quit".to_string(), C_HINT),
    ];
    draw_centered(out, view, &lines)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &GameSnapshot,
) -> std::io::Result<()> {
    let lines = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", snap.score), Color::Yellow),
        ("Enter - Play Again  Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, view, &lines)
}
