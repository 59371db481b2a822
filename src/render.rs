//! Terminal renderer: reads a [`Snapshot`] and paints it into a cell
//! buffer that is diffed against the previous frame before flushing.

use crate::bodies::{BodyId, PLANETS, PLUTO_DISTANCE};
use crate::engine::Snapshot;
use crate::math::{angle_between_deg, bearing_deg, clamp01, lerp, Vec2};
use crate::orbit::{
    iss_position, satellite_position, sun_emission, CLOSEUP_EARTH_RADIUS, CLOSEUP_MOON_RADIUS,
    SATELLITE_COUNT,
};
use crate::particles::{shower_streak, SHOWER_STREAKS};
use crate::view::Frame;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::f32::consts::PI;
use std::io::{self, Write};

const ASPECT_X: f32 = 0.5;
const BG: Color = Color::Black;

pub trait Renderer {
    fn draw(&mut self, snap: &Snapshot<'_>) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', fg: Color::White }
    }
}

struct CellBuffer {
    w: u16,
    h: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    fn set(&mut self, x: i32, y: i32, ch: char, fg: Color) {
        if x >= 0 && y >= 0 && (x as u16) < self.w && (y as u16) < self.h {
            let i = (y as usize) * (self.w as usize) + (x as usize);
            self.cells[i] = Cell { ch, fg };
        }
    }
    fn text(&mut self, x: i32, y: i32, s: &str, fg: Color) {
        for (k, ch) in s.chars().enumerate() {
            self.set(x + k as i32, y, ch, fg);
        }
    }
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

/// Maps scene coordinates (y up, roughly [-1.2, 1.2]) onto cells.
#[derive(Clone, Copy)]
struct Viewport {
    cx: f32,
    cy: f32,
    scale: f32,
}

impl Viewport {
    fn fit(w: u16, h: u16, extent: f32) -> Self {
        let half_h = (h as f32 - 2.0) * 0.5;
        let half_w = w as f32 * 0.5 * ASPECT_X;
        Self {
            cx: w as f32 * 0.5,
            cy: 1.0 + half_h,
            scale: half_h.min(half_w) / extent,
        }
    }
    fn cell(&self, p: Vec2) -> (i32, i32) {
        (
            (self.cx + p.x * self.scale / ASPECT_X).round() as i32,
            (self.cy - p.y * self.scale).round() as i32,
        )
    }
    fn plot(&self, buf: &mut CellBuffer, p: Vec2, ch: char, fg: Color) {
        let (x, y) = self.cell(p);
        buf.set(x, y, ch, fg);
    }
    /// Filled disc; `shade` picks the glyph and colour per point.
    fn disc(
        &self,
        buf: &mut CellBuffer,
        c: Vec2,
        r: f32,
        shade: impl Fn(Vec2) -> Option<(char, Color)>,
    ) {
        let rows = (r * self.scale).ceil() as i32;
        let cols = (r * self.scale / ASPECT_X).ceil() as i32;
        let (x0, y0) = self.cell(c);
        if rows == 0 {
            if let Some((ch, fg)) = shade(Vec2::ZERO) {
                buf.set(x0, y0, ch, fg);
            }
            return;
        }
        for dy in -rows..=rows {
            for dx in -cols..=cols {
                let off = Vec2::new(dx as f32 * ASPECT_X / self.scale, -(dy as f32) / self.scale);
                if off.len() <= r {
                    if let Some((ch, fg)) = shade(off) {
                        buf.set(x0 + dx, y0 + dy, ch, fg);
                    }
                }
            }
        }
    }
    fn ring(&self, buf: &mut CellBuffer, c: Vec2, r: f32, fg: Color) {
        let steps = ((r * self.scale * 8.0) as usize).clamp(12, 400);
        for k in 0..steps {
            let p = c.add(Vec2::polar(r, k as f32 / steps as f32 * PI * 2.0));
            self.plot(buf, p, '·', fg);
        }
    }
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb {
        r: (clamp01(r) * 255.0) as u8,
        g: (clamp01(g) * 255.0) as u8,
        b: (clamp01(b) * 255.0) as u8,
    }
}

fn grey(v: f32) -> Color {
    rgb(v, v, v * 1.1)
}

fn planet_color(id: BodyId) -> (f32, f32, f32) {
    const COLORS: [(f32, f32, f32); 8] = [
        (0.75, 0.75, 0.75),
        (0.95, 0.75, 0.45),
        (0.2, 0.5, 1.0),
        (0.95, 0.35, 0.15),
        (0.85, 0.65, 0.45),
        (0.95, 0.85, 0.55),
        (0.65, 0.92, 0.92),
        (0.35, 0.45, 0.92),
    ];
    COLORS[id.index()]
}

/// Lit side faces `light_bearing` (degrees); the far side is dimmed.
fn lit_shade(base: (f32, f32, f32), light_bearing: f32) -> impl Fn(Vec2) -> Option<(char, Color)> {
    move |off: Vec2| {
        let a = off.y.atan2(off.x).to_degrees();
        let lit = off.len() < 1e-6 || angle_between_deg(a, light_bearing) <= 90.0;
        let k = if lit { 1.0 } else { 0.35 };
        Some((if lit { '█' } else { '▒' }, rgb(base.0 * k, base.1 * k, base.2 * k)))
    }
}

pub struct TerminalRenderer {
    out: io::Stdout,
    cols: u16,
    rows: u16,
    prev: CellBuffer,
    cur: CellBuffer,
}

impl TerminalRenderer {
    pub fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap, Clear(ClearType::All))?;
        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
        })
    }

    pub fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn resize_if_needed(&mut self) -> anyhow::Result<()> {
        let (c, r) = terminal::size()?;
        if c != self.cols || r != self.rows {
            self.cols = c;
            self.rows = r;
            self.prev = CellBuffer::new(c, r);
            self.cur = CellBuffer::new(c, r);
            execute!(self.out, Clear(ClearType::All))?;
        }
        Ok(())
    }

    fn present(&mut self) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate, SetBackgroundColor(BG))?;
        let mut last_fg = None;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = (y as usize) * (self.cols as usize) + (x as usize);
                let c = self.cur.cells[i];
                if c == self.prev.cells[i] {
                    continue;
                }
                queue!(self.out, cursor::MoveTo(x, y))?;
                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                queue!(self.out, Print(c.ch))?;
            }
        }
        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snap: &Snapshot<'_>) -> anyhow::Result<()> {
        self.resize_if_needed()?;
        self.cur.clear();
        let buf = &mut self.cur;
        match snap.view.frame {
            Frame::Overview => draw_overview(buf, snap),
            Frame::PlanetDetail => draw_planet_detail(buf, snap),
            Frame::EarthMoon => draw_earth_moon(buf, snap),
            Frame::NightSky => draw_night_sky(buf, snap),
        }
        draw_hud(buf, snap);
        if snap.view.help_visible {
            draw_help(buf);
        }
        self.present()
    }
}

fn draw_stars(buf: &mut CellBuffer, vp: &Viewport, snap: &Snapshot<'_>, sky: bool) {
    let g = snap.phases.global;
    for s in snap.stars() {
        let b = if sky { s.sky_twinkle(g) } else { s.twinkle(g) };
        let ch = if b > 0.8 { '✦' } else if b > 0.5 { '•' } else { '·' };
        vp.plot(buf, s.position, ch, grey(lerp(0.15, 1.0, b)));
    }
}

fn draw_overview(buf: &mut CellBuffer, snap: &Snapshot<'_>) {
    let vp = Viewport::fit(buf.w, buf.h, 1.2);
    let g = snap.phases.global;

    draw_stars(buf, &vp, snap, false);
    for d in snap.dust() {
        vp.plot(buf, d.position, '.', grey(d.alpha));
    }
    for a in snap.asteroids() {
        vp.plot(buf, a.position(g), '∙', grey(0.5));
    }
    vp.plot(buf, snap.ceres(), '•', rgb(0.7, 0.7, 0.6));

    let comet = snap.comet();
    for k in 1..6 {
        vp.plot(buf, comet.sub(Vec2::new(k as f32 * 0.05, 0.0)), '-', rgb(0.4, 0.6, 1.0));
    }
    vp.plot(buf, comet, '✶', Color::White);

    if let Some(m) = snap.meteor() {
        let fade = m.life_fraction();
        vp.plot(buf, m.position.sub(m.velocity.scale(3.0)), '`', rgb(0.5 * fade, 0.7 * fade, fade));
        vp.plot(buf, m.position, '*', grey(fade.max(0.3)));
    }

    let pulse = (snap.phases.sun_pulse * 2.0).sin() * 0.5 + 0.5;
    let corona = 1.6 + (snap.phases.corona * 3.0).sin() * 0.1;
    let glow = sun_emission(snap.phases.sun_pulse) * 4.0;
    vp.ring(buf, Vec2::ZERO, snap.sun_radius() * corona, rgb(glow + 0.3, glow, 0.0));
    vp.disc(buf, Vec2::ZERO, snap.sun_radius(), |off| {
        let edge = off.len() / snap.sun_radius();
        let ch = if edge > 0.8 { '▓' } else { '█' };
        Some((ch, rgb(1.0, lerp(0.75, 0.95, pulse) - edge * 0.2, 0.3)))
    });

    for id in BodyId::all() {
        if !snap.view.visible_in_overview(id) {
            continue;
        }
        let b = id.body();
        vp.ring(buf, Vec2::ZERO, b.distance, rgb(0.18, 0.2, 0.26));
        let p = snap.position_of(id);
        let (r, gg, bb) = planet_color(id);
        vp.plot(buf, p, '●', rgb(r, gg, bb));
        for m in snap.moons(id, p) {
            vp.plot(buf, m.position, '∘', grey(0.7));
        }
        let (x, y) = vp.cell(p);
        buf.text(x + 2, y, b.name, rgb(0.8, 0.9, 1.0));
    }

    vp.ring(buf, Vec2::ZERO, PLUTO_DISTANCE, rgb(0.25, 0.18, 0.18));
    vp.plot(buf, snap.pluto(), '•', rgb(0.85, 0.75, 0.65));
    vp.plot(buf, snap.charon(), '∙', rgb(0.6, 0.6, 0.65));
}

fn draw_planet_detail(buf: &mut CellBuffer, snap: &Snapshot<'_>) {
    let vp = Viewport::fit(buf.w, buf.h, 1.0);
    draw_stars(buf, &vp, snap, false);

    let Some(id) = snap.view.effective_zoom() else {
        let white = rgb(0.9, 0.9, 1.0);
        let (tx, ty) = vp.cell(Vec2::new(-0.4, 0.85));
        buf.text(tx, ty, "SELECT A PLANET (F1-F8) TO ZOOM IN", white);
        for id in BodyId::all() {
            let i = id.index();
            let centre = Vec2::new(-0.6 + (i % 4) as f32 * 0.4, 0.35 - (i / 4) as f32 * 0.6);
            let b = id.body();
            let light = bearing_deg(snap.position_of(id), Vec2::ZERO);
            vp.disc(buf, centre, b.size * 2.5, lit_shade(planet_color(id), light));
            for m in snap.moons(id, centre) {
                let around = centre.add(m.position.sub(centre).scale(2.5));
                vp.plot(buf, around, '∘', grey(0.7));
            }
            let (x, y) = vp.cell(centre.add(Vec2::new(-0.1, 0.2)));
            buf.text(x, y, b.name, white);
            let (x, y) = vp.cell(centre.add(Vec2::new(-0.04, -0.2)));
            buf.text(x, y, &format!("[F{}]", i + 1), grey(0.6));
        }
        return;
    };

    let b = id.body();
    let zoom = 0.35 / b.size;
    let light = bearing_deg(snap.position_of(id), Vec2::ZERO);
    let spin = snap.runtime(id).self_rotation;
    let base = planet_color(id);
    vp.disc(buf, Vec2::ZERO, b.size * zoom, |off| {
        // surface bands drift with the body's own spin
        let band = ((off.x * 8.0 + spin.to_radians()).sin() * 0.5 + 0.5) * 0.25;
        let a = off.y.atan2(off.x).to_degrees();
        let lit = off.len() < 1e-6 || angle_between_deg(a, light) <= 90.0;
        let (ch, k) = if lit { ('█', 1.0 - band) } else { ('▒', 0.35) };
        Some((ch, rgb(base.0 * k, base.1 * k, base.2 * k)))
    });
    if b.ringed {
        let ring = snap.runtime(id).ring_angle.to_radians();
        for k in 0..120 {
            let t = k as f32 / 120.0 * PI * 2.0 + ring;
            let p = Vec2::new(t.cos() * b.size * zoom * 1.8, t.sin() * b.size * zoom * 0.45);
            if p.y < 0.0 || p.len() > b.size * zoom {
                vp.plot(buf, p, '─', rgb(0.9, 0.8, 0.6));
            }
        }
    }
    for m in snap.moons(id, Vec2::ZERO) {
        vp.ring(buf, Vec2::ZERO, m.orbit_radius * zoom, rgb(0.25, 0.25, 0.32));
        vp.plot(buf, m.position.scale(zoom), '●', grey(0.75));
    }

    let info = rgb(0.8, 0.9, 1.0);
    let (x, y) = vp.cell(Vec2::new(-0.95, 0.85));
    buf.text(x, y, &b.name.to_uppercase(), rgb(1.0, 1.0, 0.5));
    buf.text(x, y + 1, b.fact, info);
    buf.text(x, y + 2, &format!("Distance from Sun: {:.2} AU", b.distance), info);
    buf.text(x, y + 3, &format!("Moons: {}", b.moon_count), info);
    buf.text(x, y + 4, &format!("Spin: {:.0}°", spin.rem_euclid(360.0)), info);
    let (x, y) = vp.cell(Vec2::new(-0.3, -0.9));
    buf.text(x, y, "Press Z to exit zoom mode", rgb(0.5, 0.8, 0.5));
}

fn draw_earth_moon(buf: &mut CellBuffer, snap: &Snapshot<'_>) {
    let vp = Viewport::fit(buf.w, buf.h, 1.0);
    let g = snap.phases.global;
    draw_stars(buf, &vp, snap, false);

    let sys = snap.earth_moon();
    vp.disc(buf, sys.sun, 0.12, |_| Some(('█', rgb(1.0, 0.9, 0.5))));

    let cloud = snap.phases.cloud;
    vp.disc(buf, sys.earth, CLOSEUP_EARTH_RADIUS, |off| {
        let a = off.y.atan2(off.x).to_degrees();
        let lit = angle_between_deg(a, sys.earth_terminator) <= 90.0;
        let swirl = ((off.x * 12.0 + cloud.to_radians()).sin() * (off.y * 9.0).cos()) > 0.6;
        let (ch, c) = if swirl { ('░', (0.95, 0.95, 1.0)) } else { ('█', (0.2, 0.5, 1.0)) };
        let k = if lit { 1.0 } else { 0.3 };
        Some((ch, rgb(c.0 * k, c.1 * k, c.2 * k)))
    });

    vp.ring(buf, sys.earth, CLOSEUP_EARTH_RADIUS * 1.15, rgb(0.2, 0.25, 0.3));
    vp.plot(buf, iss_position(g), '╪', rgb(0.9, 0.9, 0.9));
    for s in 0..SATELLITE_COUNT {
        vp.plot(buf, satellite_position(s, g), '+', rgb(1.0, 1.0, 0.0));
    }

    let eclipsed = snap.lunar_eclipse();
    vp.ring(buf, sys.earth, sys.moon.sub(sys.earth).len(), rgb(0.3, 0.33, 0.4));
    vp.disc(buf, sys.moon, CLOSEUP_MOON_RADIUS, |off| {
        if eclipsed {
            return Some(('▒', rgb(0.45, 0.15, 0.1)));
        }
        lit_shade((0.88, 0.88, 0.92), sys.moon_terminator)(off)
    });

    for m in 0..SHOWER_STREAKS {
        if let Some(s) = shower_streak(m, g) {
            vp.plot(buf, s.position, '╲', grey(s.alpha));
        }
    }
}

fn draw_night_sky(buf: &mut CellBuffer, snap: &Snapshot<'_>) {
    let vp = Viewport::fit(buf.w, buf.h, 1.0);
    let g = snap.phases.global;
    let horizon = -0.45;
    for s in snap.stars() {
        if s.position.y > horizon {
            let b = s.sky_twinkle(g);
            let ch = if b > 0.8 { '✦' } else if b > 0.5 { '•' } else { '·' };
            vp.plot(buf, s.position, ch, rgb(b, b * 0.95, b * 1.1));
        }
    }
    // waxing crescent
    let moon = Vec2::new(0.4, 0.55);
    vp.disc(buf, moon, 0.05, |off| {
        (off.add(Vec2::new(-0.025, 0.0)).len() > 0.045).then_some(('█', rgb(0.95, 0.95, 0.98)))
    });
    for layer in 0..3 {
        for i in 0..20 {
            let x = -0.9 + i as f32 * 0.09;
            let h = 0.3 + 0.2 * (g * 0.03 + i as f32 * 0.5 + layer as f32).sin();
            let a = 0.15 + 0.1 * (g * 0.04 + i as f32).sin();
            let glow = rgb(0.8 * a, 4.0 * a, 2.0 * a);
            vp.plot(buf, Vec2::new(x, h + layer as f32 * 0.05), '~', glow);
        }
    }
    let (_, gy) = vp.cell(Vec2::new(0.0, horizon));
    for y in gy..buf.h as i32 {
        for x in 0..buf.w as i32 {
            buf.set(x, y, '▀', rgb(0.05, 0.08, 0.05));
        }
    }
    let fire = (g * 0.25).sin() * 0.5 + 0.5;
    vp.plot(buf, Vec2::new(0.3, horizon + 0.02), '▲', rgb(1.0, lerp(0.3, 0.7, fire), 0.1));
}

fn draw_hud(buf: &mut CellBuffer, snap: &Snapshot<'_>) {
    let v = &snap.view;
    let line = format!(
        " [{}] {}  speed {:.2}x  {}{}  H help ",
        v.frame.number(),
        v.frame.title(),
        v.speed_multiplier,
        if v.paused { "PAUSED" } else { "running" },
        if v.eclipse_mode { "  eclipse" } else { "" },
    );
    for x in 0..buf.w as i32 {
        buf.set(x, 0, ' ', Color::White);
    }
    buf.text(0, 0, &line, rgb(0.7, 0.85, 1.0));
    let paused: Vec<&str> = BodyId::all()
        .filter(|id| v.per_body_paused[id.index()])
        .map(|id| PLANETS[id.index()].name)
        .collect();
    if !paused.is_empty() {
        let text = format!("spin paused: {}", paused.join(", "));
        buf.text(0, buf.h as i32 - 1, &text, grey(0.6));
    }
}

fn draw_help(buf: &mut CellBuffer) {
    const LINES: [&str; 10] = [
        "SOLAR SYSTEM EXPLORER - CONTROLS",
        "",
        "1-4        switch frames",
        "P          pause / resume",
        "H          toggle help",
        "+ / -      speed",
        "E          eclipse mode",
        "0,5,6,7    pause planet spin (Alt+0-7 any)",
        "F1-F8, Z   zoom planet / leave zoom",
        "Esc, Q     exit",
    ];
    let bw = 48i32.min(buf.w as i32 - 2);
    let bh = LINES.len() as i32 + 2;
    let x0 = (buf.w as i32 - bw) / 2;
    let y0 = (buf.h as i32 - bh) / 2;
    let edge = rgb(0.3, 0.6, 1.0);
    for y in y0..y0 + bh {
        for x in x0..x0 + bw {
            let border = y == y0 || y == y0 + bh - 1 || x == x0 || x == x0 + bw - 1;
            buf.set(x, y, if border { '░' } else { ' ' }, edge);
        }
    }
    for (k, l) in LINES.iter().enumerate() {
        buf.text(x0 + 2, y0 + 1 + k as i32, l, Color::White);
    }
}
