//! Entrance animations for landing content, gated on the reduced-motion
//! preference. An `AnimationSpec` is a pure value: rendering only turns it
//! into an inline style fragment, the `@keyframes` live in the page CSS.

/// Longest entrance transition we ever play, in seconds.
pub const MAX_DURATION: f32 = 0.6;

/// Snapshot of the animatable properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl VisualState {
    /// Where every entrance ends: fully opaque, in place, unscaled.
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// Fade in while rising `rise` pixels into place.
    FadeUp { rise: f32 },
    /// Fade in while growing from `from` of the final size.
    FadeScale { from: f32 },
}

/// A two-state entrance: start away from `VisualState::RESTING`, interpolate
/// there over `duration` seconds after `delay` seconds. Reduced motion
/// collapses the spec so the initial state already equals the final one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    entrance: Entrance,
    duration: f32,
    delay: f32,
}

impl AnimationSpec {
    pub fn fade_up(reduced_motion: bool, rise: f32, duration: f32, delay: f32) -> Self {
        Self::new(Entrance::FadeUp { rise }, reduced_motion, duration, delay)
    }

    pub fn fade_scale(reduced_motion: bool, from: f32, duration: f32, delay: f32) -> Self {
        Self::new(Entrance::FadeScale { from }, reduced_motion, duration, delay)
    }

    fn new(entrance: Entrance, reduced_motion: bool, duration: f32, delay: f32) -> Self {
        if reduced_motion {
            Self {
                entrance,
                duration: 0.0,
                delay: 0.0,
            }
        } else {
            Self {
                entrance,
                duration: duration.clamp(0.0, MAX_DURATION),
                delay: delay.max(0.0),
            }
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_static(&self) -> bool {
        self.duration == 0.0
    }

    pub fn initial_state(&self) -> VisualState {
        if self.is_static() {
            return VisualState::RESTING;
        }
        match self.entrance {
            Entrance::FadeUp { rise } => VisualState {
                opacity: 0.0,
                translate_y: rise,
                scale: 1.0,
            },
            Entrance::FadeScale { from } => VisualState {
                opacity: 0.0,
                translate_y: 0.0,
                scale: from,
            },
        }
    }

    pub fn final_state(&self) -> VisualState {
        VisualState::RESTING
    }

    /// Inline style fragment for the animated element. The named keyframes
    /// read the custom properties set here.
    pub fn style(&self) -> String {
        if self.is_static() {
            return "animation: none;".to_string();
        }
        match self.entrance {
            Entrance::FadeUp { rise } => format!(
                "--rise: {}px; animation: fade-up {}s ease-out both; animation-delay: {}s;",
                rise, self.duration, self.delay
            ),
            Entrance::FadeScale { from } => format!(
                "--start-scale: {}; animation: fade-scale {}s ease-out both; animation-delay: {}s;",
                from, self.duration, self.delay
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_starts_at_rest() {
        let spec = AnimationSpec::fade_up(true, 30.0, 0.6, 0.3);
        assert_eq!(spec.initial_state(), spec.final_state());
        assert_eq!(spec.duration(), 0.0);
        assert_eq!(spec.style(), "animation: none;");

        let spec = AnimationSpec::fade_scale(true, 0.9, 0.5, 0.4);
        assert_eq!(spec.initial_state(), spec.final_state());
        assert!(spec.is_static());
    }

    #[test]
    fn full_motion_transitions_within_budget() {
        let spec = AnimationSpec::fade_up(false, 30.0, 0.6, 0.0);
        assert!(spec.duration() > 0.0 && spec.duration() <= MAX_DURATION);
        assert_ne!(spec.initial_state(), spec.final_state());
        assert_eq!(spec.initial_state().opacity, 0.0);
        assert_eq!(spec.initial_state().translate_y, 30.0);
    }

    #[test]
    fn overlong_durations_are_clamped() {
        let spec = AnimationSpec::fade_scale(false, 0.9, 2.0, 0.0);
        assert_eq!(spec.duration(), MAX_DURATION);
    }

    #[test]
    fn style_carries_delay_and_offsets() {
        let spec = AnimationSpec::fade_up(false, 20.0, 0.5, 0.2);
        let style = spec.style();
        assert!(style.contains("--rise: 20px"));
        assert!(style.contains("fade-up 0.5s"));
        assert!(style.contains("animation-delay: 0.2s"));

        let spec = AnimationSpec::fade_scale(false, 0.9, 0.5, 0.4);
        assert!(spec.style().contains("--start-scale: 0.9"));
    }
}
