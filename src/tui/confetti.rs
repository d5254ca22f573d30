use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use std::time::{Duration, Instant};

use crate::tui::theme;

pub const BURST_PARTICLES: usize = 100;
pub const BURST_DURATION: Duration = Duration::from_secs(5);

const CHARS: [char; 6] = ['▪', '■', '●', '◆', '▴', '✦'];

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
}

impl Particle {
    fn new(width: u16, height: u16) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            // Stagger the start above the top edge so they arrive in waves
            y: -rng.gen_range(0.0..height.max(1) as f32),
            vx: rng.gen_range(-0.15..0.15),
            // 2-5 s to cross the screen at 10 frames per second
            vy: height.max(1) as f32 / rng.gen_range(20.0..50.0),
            char: CHARS[rng.gen_range(0..CHARS.len())],
            color: theme::CONFETTI[rng.gen_range(0..theme::CONFETTI.len())],
        }
    }

    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    fn is_alive(&self, width: u16, height: u16) -> bool {
        self.y < height as f32 && self.x >= 0.0 && self.x < width as f32
    }
}

#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    until: Option<Instant>,
}

impl Confetti {
    pub fn burst(&mut self, width: u16, height: u16) {
        self.particles = (0..BURST_PARTICLES)
            .map(|_| Particle::new(width, height))
            .collect();
        self.until = Some(Instant::now() + BURST_DURATION);
    }

    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn update(&mut self, width: u16, height: u16) {
        let Some(until) = self.until else {
            return;
        };
        if Instant::now() >= until {
            self.clear();
            return;
        }
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(|p| p.y < 0.0 || p.is_alive(width, height));
        if self.particles.is_empty() {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.until = None;
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            if p.y < 0.0 || p.x < 0.0 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x < area.width && y < area.height {
                let pos = (area.x + x, area.y + y);
                buf[pos].set_char(p.char);
                buf[pos].set_style(Style::default().fg(p.color));
            }
        }
    }
}
