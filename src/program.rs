use serde::Serialize;

use crate::affirmation::LifeArea;

/// A limiting belief paired with its reframe, shown by the reprogramming
/// flow. The rewrite is what a user can save as a personal affirmation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HiddenProgram {
    pub limiting: &'static str,
    pub rewrite: &'static str,
    pub area: LifeArea,
}

const fn program(limiting: &'static str, rewrite: &'static str, area: LifeArea) -> HiddenProgram {
    HiddenProgram {
        limiting,
        rewrite,
        area,
    }
}

pub const ALL: &[HiddenProgram] = &[
    // Money
    program(
        "Money is hard to come by",
        "Money flows to me through ease and alignment.",
        LifeArea::Money,
    ),
    program(
        "I have to work very hard for everything",
        "I create effortlessly and I am richly rewarded.",
        LifeArea::Money,
    ),
    program(
        "Rich people are greedy or selfish",
        "Wealth amplifies who I already am — generous, kind, and powerful.",
        LifeArea::Money,
    ),
    program(
        "I'm not ready to have that much money",
        "I am ready now, and I grow into more every single day.",
        LifeArea::Money,
    ),
    program(
        "Money always slips through my fingers",
        "Money loves to stay with me and quietly multiply.",
        LifeArea::Money,
    ),
    program(
        "I don't deserve financial abundance",
        "Abundance is my birthright and I receive it fully.",
        LifeArea::Money,
    ),
    // Relationships
    program(
        "Love always ends in pain",
        "Love is safe, expansive, and always evolving.",
        LifeArea::Relationships,
    ),
    program(
        "I have to be perfect to be loved",
        "I am loved for exactly who I am, edges and all.",
        LifeArea::Relationships,
    ),
    program(
        "People always leave",
        "The right people stay and grow with me.",
        LifeArea::Relationships,
    ),
    program(
        "I push people away",
        "I attract and keep the connections I truly deserve.",
        LifeArea::Relationships,
    ),
    program(
        "I'm too much for people",
        "The right people find my depth and intensity magnetic.",
        LifeArea::Relationships,
    ),
    program(
        "I'm always the one who cares more",
        "I attract relationships of mutual love and devotion.",
        LifeArea::Relationships,
    ),
    // Self-worth
    program(
        "I'm not good enough",
        "I am more than enough — always have been.",
        LifeArea::SelfWorth,
    ),
    program(
        "I need to earn my worth",
        "My worth is inherent, unconditional, and unshakeable.",
        LifeArea::SelfWorth,
    ),
    program(
        "Other people are more deserving than me",
        "I deserve everything good that life has to offer.",
        LifeArea::SelfWorth,
    ),
    program(
        "I don't deserve to take up space",
        "I belong here. My presence is a gift.",
        LifeArea::SelfWorth,
    ),
    program(
        "I'm too flawed to be truly loved",
        "My wholeness includes all of my imperfections.",
        LifeArea::SelfWorth,
    ),
    program(
        "I have to be useful to have value",
        "My value exists completely apart from what I produce.",
        LifeArea::SelfWorth,
    ),
    // Fear
    program(
        "The world is not safe",
        "I am protected, guided, and supported in every step.",
        LifeArea::Fear,
    ),
    program(
        "If I fail I won't recover",
        "Every setback makes me wiser and more resilient.",
        LifeArea::Fear,
    ),
    program(
        "Something bad is always about to happen",
        "Good things are always quietly unfolding for me.",
        LifeArea::Fear,
    ),
    program(
        "I'm not brave enough",
        "Courage lives in me and grows every time I act.",
        LifeArea::Fear,
    ),
    program(
        "Being seen is dangerous",
        "Being seen opens doors I haven't even imagined yet.",
        LifeArea::Fear,
    ),
    program(
        "I always mess things up",
        "I learn, I adjust, and I always find my way forward.",
        LifeArea::Fear,
    ),
    // Body
    program(
        "My body is broken or wrong",
        "My body is constantly healing and moving toward wholeness.",
        LifeArea::Body,
    ),
    program(
        "I'll never look the way I want",
        "My body transforms beautifully when I treat it with love.",
        LifeArea::Body,
    ),
    program(
        "I'm lazy and undisciplined",
        "I move and nourish my body in ways that feel natural and joyful.",
        LifeArea::Body,
    ),
    program(
        "My worth is tied to how I look",
        "My value has absolutely nothing to do with my appearance.",
        LifeArea::Body,
    ),
    program(
        "I've always struggled with my body",
        "A new, loving relationship with my body begins right now.",
        LifeArea::Body,
    ),
    program(
        "My body betrays me",
        "My body is always doing its best to support me.",
        LifeArea::Body,
    ),
    // Career
    program(
        "Success is for other people",
        "Success is my natural destination and I'm already on my way.",
        LifeArea::Career,
    ),
    program(
        "I'm not talented enough",
        "My unique gifts are exactly what the world needs.",
        LifeArea::Career,
    ),
    program(
        "I have to hustle 24/7 to succeed",
        "I succeed with ease, focus, and aligned action.",
        LifeArea::Career,
    ),
    program(
        "It's too late for me",
        "This is exactly the right time for my breakthrough.",
        LifeArea::Career,
    ),
    program(
        "People don't take me seriously",
        "I command respect through my presence and my work.",
        LifeArea::Career,
    ),
    program(
        "I don't know enough to be successful",
        "I know enough to start, and I'll learn everything else on the way.",
        LifeArea::Career,
    ),
];

/// Programs for one life area, in pool order.
pub fn programs_for(area: LifeArea) -> Vec<HiddenProgram> {
    ALL.iter().filter(|p| p.area == area).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covered_areas_carry_six_programs_each() {
        for area in [
            LifeArea::Money,
            LifeArea::Relationships,
            LifeArea::SelfWorth,
            LifeArea::Fear,
            LifeArea::Body,
            LifeArea::Career,
        ] {
            assert_eq!(programs_for(area).len(), 6, "programs for {:?}", area);
        }
        assert_eq!(ALL.len(), 36);
    }

    #[test]
    fn test_uncovered_area_has_no_programs() {
        assert!(programs_for(LifeArea::Calm).is_empty());
    }

    #[test]
    fn test_every_program_pairs_belief_with_rewrite() {
        for p in ALL {
            assert!(!p.limiting.is_empty());
            assert!(!p.rewrite.is_empty());
            assert_ne!(p.limiting, p.rewrite);
        }
    }
}
