//! The drag-reorder state machine.
//!
//! Phases: `Idle -> Armed -> Dragging -> Draining -> Idle`. Only one session
//! exists at a time; presses are ignored until the previous session has fully
//! drained. All timing comes in through the caller (`now` on events, one
//! `on_tick` per display refresh), so the machine is deterministic.

use std::mem;
use std::time::Instant;

use tabhost_common::clamp;

use crate::config::DragConfig;

use super::animation::Anim;
use super::layout::insertion_index;
use super::DragSurface;

/// A displaced sibling: its pre-drag index, its flow position as-if the
/// dragged tab had left the flow, and its relative animation offset.
#[derive(Debug)]
struct Sibling {
    tab_index: usize,
    base_offset: f64,
    extent: f64,
    anim: Anim,
}

#[derive(Debug)]
struct Session {
    /// Index of the dragged tab when the drag started.
    from_index: usize,
    /// Candidate insertion index; updated on every pointer move.
    move_to: usize,
    /// Pointer distance from the dragged tab's leading edge at press.
    grab_offset: f64,
    x_min: f64,
    x_max: f64,
    dragged_extent: f64,
    /// Resting offset of the end placeholder.
    end_offset: f64,
    /// Absolute offset of the dragged tab.
    dragged: Anim,
    /// Every other tab, in positional order.
    siblings: Vec<Sibling>,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Armed {
        index: usize,
        down_x: f64,
        deadline: Instant,
    },
    Dragging(Session),
    Draining(Session),
}

pub struct DragReorderController {
    config: DragConfig,
    phase: Phase,
}

impl DragReorderController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// No session armed, active, or draining.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Pointer pressed on the tab at `index`. Starts the arm debounce;
    /// ignored while a previous session is still underway.
    pub fn on_press(&mut self, index: usize, x: f64, now: Instant) {
        if !self.is_idle() {
            tracing::debug!(index, "press ignored: drag session in progress");
            return;
        }
        self.phase = Phase::Armed {
            index,
            down_x: x,
            deadline: now + self.config.arm_delay(),
        };
    }

    /// Pointer moved to `x`.
    pub fn on_move(&mut self, surface: &mut dyn DragSurface, x: f64, now: Instant) {
        match &mut self.phase {
            Phase::Armed {
                index,
                down_x,
                deadline,
            } => {
                // Crossing the distance threshold arms the drag without
                // waiting out the debounce.
                if now >= *deadline || (x - *down_x).abs() > self.config.arm_distance {
                    let (index, down_x) = (*index, *down_x);
                    self.start_drag(surface, index, down_x);
                    self.on_move(surface, x, now);
                }
            }
            Phase::Dragging(session) => session.pointer_moved(x),
            Phase::Idle | Phase::Draining(_) => {}
        }
    }

    /// Pointer released.
    pub fn on_release(&mut self, surface: &mut dyn DragSurface) {
        match mem::replace(&mut self.phase, Phase::Idle) {
            // Never armed into a drag: a plain click, no reorder state was
            // ever entered.
            Phase::Armed { index, .. } => surface.click(index),
            Phase::Dragging(mut session) => {
                if session.from_index != session.move_to {
                    surface.on_end(session.from_index, session.move_to);
                }
                let rest = if session.move_to < session.siblings.len() {
                    session.siblings[session.move_to].base_offset
                } else {
                    session.end_offset
                };
                session.dragged.retarget(rest);
                self.phase = Phase::Draining(session);
            }
            phase => self.phase = phase,
        }
    }

    /// One display tick: fire an elapsed arm deadline and advance the
    /// animation driver. The driver keeps running while the session is
    /// executing or any entry is still moving.
    pub fn on_tick(&mut self, surface: &mut dyn DragSurface, now: Instant) {
        match &mut self.phase {
            Phase::Armed {
                index,
                down_x,
                deadline,
            } => {
                if now >= *deadline {
                    let (index, down_x) = (*index, *down_x);
                    self.start_drag(surface, index, down_x);
                }
            }
            Phase::Dragging(session) => {
                session.advance(surface, self.config.speed);
            }
            Phase::Draining(session) => {
                if !session.advance(surface, self.config.speed) {
                    // Everything at rest: drain complete.
                    let Phase::Draining(session) = mem::replace(&mut self.phase, Phase::Idle)
                    else {
                        unreachable!()
                    };
                    surface.settle(session.from_index, session.move_to);
                }
            }
            Phase::Idle => {}
        }
    }

    fn start_drag(&mut self, surface: &mut dyn DragSurface, index: usize, down_x: f64) {
        let layout = surface.sample_layout();
        let Some(slot) = layout.tabs.get(index).copied() else {
            tracing::warn!(index, tabs = layout.tabs.len(), "drag target out of range");
            self.phase = Phase::Idle;
            return;
        };

        let mut siblings = Vec::with_capacity(layout.tabs.len().saturating_sub(1));
        for (i, tab) in layout.tabs.iter().enumerate() {
            if i == index {
                continue;
            }
            // Tabs after the dragged one keep their visual position through a
            // relative offset equal to the vacated extent.
            let shift = if i < index { 0.0 } else { slot.extent };
            siblings.push(Sibling {
                tab_index: i,
                base_offset: tab.offset - shift,
                extent: tab.extent,
                anim: Anim::at(shift),
            });
        }
        let end_offset = siblings
            .last()
            .map(|s| s.base_offset + s.extent)
            .unwrap_or(slot.offset);

        let session = Session {
            from_index: index,
            move_to: index,
            grab_offset: down_x - slot.offset,
            x_min: layout.origin,
            x_max: layout.origin + layout.extent - slot.extent,
            dragged_extent: slot.extent,
            end_offset,
            dragged: Anim::at(slot.offset),
            siblings,
        };

        surface.lift(index);
        for sibling in &session.siblings {
            surface.render_sibling(sibling.tab_index, sibling.anim.value);
        }
        surface.render_dragged(session.dragged.value);
        tracing::debug!(index, "drag started");

        self.phase = Phase::Dragging(session);
    }
}

impl Session {
    fn pointer_moved(&mut self, x: f64) {
        self.dragged
            .retarget(clamp(x - self.grab_offset, self.x_min, self.x_max));

        let next = insertion_index(
            x,
            self.siblings
                .iter()
                .map(|s| (s.anim.to + s.base_offset, s.extent)),
        );
        if next == self.move_to {
            return;
        }

        // Only the siblings between the old and new slot change course; each
        // shifts by the dragged extent toward the vacated side.
        if next > self.move_to {
            for sibling in &mut self.siblings[self.move_to..next] {
                sibling.anim.retarget(0.0);
            }
        } else {
            let extent = self.dragged_extent;
            for sibling in &mut self.siblings[next..self.move_to] {
                sibling.anim.retarget(extent);
            }
        }
        self.move_to = next;
    }

    /// Advance every moving entry by one step and render it. Returns whether
    /// anything moved this tick.
    fn advance(&mut self, surface: &mut dyn DragSurface, speed: f64) -> bool {
        let mut animating = false;
        if self.dragged.step(speed) {
            surface.render_dragged(self.dragged.value);
            animating = true;
        }
        for sibling in &mut self.siblings {
            if sibling.anim.step(speed) {
                surface.render_sibling(sibling.tab_index, sibling.anim.value);
                animating = true;
            }
        }
        animating
    }
}
