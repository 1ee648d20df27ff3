//! Entrance animation timings for the capture dialog.
//!
//! Each animated element gets an inline `animation` declaration built from a
//! [`Motion`]; the keyframes themselves live in [`keyframes_css`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    /// Overshooting curve standing in for a stiff, lightly damped spring.
    Spring,
}

impl Easing {
    const fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Motion {
    /// Inline style value; `both` keeps the start frame during the delay.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

pub const BACKDROP: Motion = Motion {
    keyframes: "pg-fade-in",
    duration_ms: 200,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const BODY: Motion = Motion {
    keyframes: "pg-body-in",
    duration_ms: 300,
    delay_ms: 0,
    easing: Easing::Spring,
};

pub const ARTWORK: Motion = Motion {
    keyframes: "pg-pop-in",
    duration_ms: 500,
    delay_ms: 200,
    easing: Easing::EaseOut,
};

pub const GLOW: Motion = Motion {
    keyframes: "pg-glow-in",
    duration_ms: 700,
    delay_ms: 300,
    easing: Easing::EaseOut,
};

pub const NAME: Motion = Motion {
    keyframes: "pg-fade-in",
    duration_ms: 300,
    delay_ms: 400,
    easing: Easing::EaseOut,
};

const TILE_BASE_DELAY_MS: u32 = 500;
const TILE_ROW_STEP_MS: u32 = 100;

/// Attribute tiles alternate left/right and each row starts a step later.
#[must_use]
pub const fn tile(index: usize) -> Motion {
    let keyframes = if index % 2 == 0 {
        "pg-from-left"
    } else {
        "pg-from-right"
    };
    #[allow(clippy::cast_possible_truncation)]
    let row = (index / 2) as u32;
    Motion {
        keyframes,
        duration_ms: 300,
        delay_ms: TILE_BASE_DELAY_MS + row * TILE_ROW_STEP_MS,
        easing: Easing::Spring,
    }
}

/// Keyframes plus the hover/press helpers used by the dialog.
#[must_use]
pub const fn keyframes_css() -> &'static str {
    "@keyframes pg-fade-in{from{opacity:0}to{opacity:1}}\
@keyframes pg-body-in{from{opacity:0;transform:translateY(-50px) scale(.9)}to{opacity:1;transform:none}}\
@keyframes pg-pop-in{from{opacity:0;transform:scale(.5)}to{opacity:1;transform:scale(1)}}\
@keyframes pg-glow-in{from{opacity:0;transform:scale(0)}to{opacity:.7;transform:scale(1.2)}}\
@keyframes pg-from-left{from{opacity:0;transform:translateX(-20px)}to{opacity:1;transform:none}}\
@keyframes pg-from-right{from{opacity:0;transform:translateX(20px)}to{opacity:1;transform:none}}\
@keyframes pg-wiggle{0%{transform:scale(1.1) rotate(0)}33%{transform:scale(1.1) rotate(5deg)}66%{transform:scale(1.1) rotate(-5deg)}100%{transform:scale(1.1) rotate(0)}}\
.pg-wiggle{transition:transform .2s}.pg-wiggle:hover{transform:scale(1.1);animation:pg-wiggle .5s ease-in-out}\
.pg-press{transition:transform .15s}.pg-press:hover{transform:scale(1.03)}.pg-press:active{transform:scale(.97)}\
@media (prefers-reduced-motion:reduce){.congratulations-modal-container *{animation:none!important;transition:none!important}}"
}
