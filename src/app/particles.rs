use std::cell::RefCell;
use std::rc::Rc;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, utils::Pausable};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const PARTICLE_COUNT: usize = 100;
const PARTICLE_COLOR: &str = "#00D9FF";

/// xorshift64 - good enough for decorative dust, and deterministic for tests.
struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        // xorshift state must be non-zero
        XorShift64(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    speed: f64,
}

/// The particle simulation behind the hero section: dust drifting upward,
/// re-entering from the bottom edge once it leaves the top.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: XorShift64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = XorShift64::new(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.range(0.0, width),
                y: rng.range(0.0, height),
                size: rng.range(0.5, 2.5),
                alpha: rng.range(0.1, 0.6),
                speed: rng.range(0.2, 0.7),
            })
            .collect();
        ParticleField {
            particles,
            width,
            height,
            rng,
        }
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.alpha = self.rng.range(0.1, 0.6);
            p.y -= p.speed;
            if p.y < 0.0 {
                p.y = height;
                p.x = self.rng.range(0.0, width);
            }
        }
    }

    /// Track a new canvas size, rescattering particles the shrink stranded.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            if p.x > width {
                p.x = self.rng.range(0.0, width);
            }
            if p.y > height {
                p.y = self.rng.range(0.0, height);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(PARTICLE_COLOR);
    for p in particles {
        ctx.set_global_alpha(p.alpha);
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

/// Canvas backdrop animated with a frame loop owned by this component.
///
/// The loop and the resize listener are both scoped to the component's
/// lifetime, and the loop pauses whenever `active` reads false.
#[component]
pub fn ParticleCanvas(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = Rc::new(RefCell::new(None::<ParticleField>));

    let fit_canvas = {
        let field = Rc::clone(&field);
        move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let width = canvas.offset_width() as f64;
            let height = canvas.offset_height() as f64;
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let mut field = field.borrow_mut();
            match field.as_mut() {
                Some(f) => f.resize(width, height),
                None => {
                    let seed = chrono::Utc::now().timestamp_millis() as u64;
                    *field = Some(ParticleField::new(width, height, seed));
                }
            }
        }
    };

    // size once the canvas exists; effects don't run during SSR
    Effect::new({
        let fit_canvas = fit_canvas.clone();
        move |_| fit_canvas()
    });

    let _ = use_event_listener(use_window(), ev::resize, {
        let fit_canvas = fit_canvas.clone();
        move |_| fit_canvas()
    });

    let Pausable { pause, resume, .. } = use_raf_fn({
        let field = Rc::clone(&field);
        move |_| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                return;
            };
            let mut field = field.borrow_mut();
            let Some(field) = field.as_mut() else {
                return;
            };
            field.step();
            draw(
                &ctx,
                canvas.width() as f64,
                canvas.height() as f64,
                field.particles(),
            );
        }
    });

    Effect::new(move |_| {
        if active.get() {
            resume();
        } else {
            pause();
        }
    });

    view! { <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full"></canvas> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_population() {
        let field = ParticleField::new(800.0, 600.0, 42);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.5..2.5).contains(&p.size));
            assert!((0.1..0.6).contains(&p.alpha));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::new(800.0, 600.0, 7);
        let b = ParticleField::new(800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_step_moves_upward_and_wraps() {
        let mut field = ParticleField::new(200.0, 100.0, 3);
        // run long enough for every particle to wrap at least once
        for _ in 0..2000 {
            field.step();
            for p in field.particles() {
                assert!(p.y <= 100.0);
                assert!((0.0..200.0).contains(&p.x));
            }
        }
    }

    #[test]
    fn test_resize_rescatters_stranded_particles() {
        let mut field = ParticleField::new(1000.0, 800.0, 11);
        field.resize(300.0, 200.0);
        for p in field.particles() {
            assert!(p.x <= 300.0);
            assert!(p.y <= 200.0);
        }
        // particles keep wrapping against the new bounds
        for _ in 0..500 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.y <= 200.0);
            assert!((0.0..300.0).contains(&p.x));
        }
    }
}
