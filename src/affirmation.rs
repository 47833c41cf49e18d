use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Life areas the content pools are grouped by.
///
/// Serialized under the display names the settings surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeArea {
    Money,
    Confidence,
    Love,
    Calm,
    Career,
    #[serde(rename = "Feminine Energy")]
    FeminineEnergy,
    Relationships,
    #[serde(rename = "Self-Worth")]
    SelfWorth,
    Fear,
    Body,
}

/// One curated affirmation line.
#[derive(Debug, Clone, Serialize)]
pub struct Affirmation {
    pub text: &'static str,
    pub area: LifeArea,
}

const MONEY: &[&str] = &[
    "Money flows to me easily and often.",
    "I am magnetic to wealth and abundance.",
    "My income expands beyond anything I've imagined.",
    "I deserve to be richly rewarded for my gifts.",
    "Prosperity is my natural state.",
    "Every day I create more value and receive more wealth.",
    "Money loves me and I welcome it fully.",
    "Abundance is always available to me.",
    "I attract financial opportunities effortlessly.",
    "I am worthy of a luxurious, expansive life.",
    "Wealth flows through me like a river.",
    "My bank account reflects my inner abundance.",
    "I receive money with grace and gratitude.",
    "Opportunities to grow my wealth appear constantly.",
    "I am open to all the ways money can come to me.",
    "Financial freedom is my reality.",
    "I choose wealth. Wealth chooses me.",
    "My relationship with money is healthy, loving, and expansive.",
    "I attract abundance in all forms.",
    "Today money chooses me.",
];

const CONFIDENCE: &[&str] = &[
    "I walk into every room knowing my worth.",
    "I trust myself completely.",
    "My presence alone creates impact.",
    "I am exactly who I am meant to be.",
    "I speak and people listen.",
    "My confidence is rooted and unshakeable.",
    "I own every room I enter.",
    "I am enough, right now, exactly as I am.",
    "I lead with certainty and grace.",
    "My voice matters and deserves to be heard.",
    "I radiate quiet, magnetic power.",
    "I choose myself, always.",
    "My standards are high because I know my value.",
    "I am becoming more magnetic every day.",
    "I trust my instincts completely.",
    "I show up fully and unapologetically.",
    "My inner knowing never steers me wrong.",
    "I am bold, decisive, and clear.",
    "I believe in myself as deeply as I believe in anything.",
    "You walk into rooms and opportunities open.",
];

const LOVE: &[&str] = &[
    "I am deeply loved and cherished.",
    "Love finds me wherever I go.",
    "I am worthy of a deep, expansive love.",
    "My heart is open and love flows freely.",
    "I attract relationships that lift me higher.",
    "I am loved for exactly who I am.",
    "The love I give returns to me multiplied.",
    "I am a magnet for genuine, lasting connection.",
    "My relationships are nourishing and joyful.",
    "I deserve to be someone's first priority.",
    "Love is safe and I welcome it fully.",
    "I am adored, appreciated, and cherished.",
    "The right people are drawn to my energy.",
    "I receive love as easily as I give it.",
    "My capacity for love expands every day.",
    "I am a safe place for love to land.",
    "Real, lasting love is my reality.",
    "My partner sees me, chooses me, and adores me.",
    "Love surrounds me in every direction.",
    "I am magnetic to the love that is truly meant for me.",
];

const CALM: &[&str] = &[
    "I am at peace with where I am right now.",
    "Stillness is my superpower.",
    "I breathe in calm and exhale all tension.",
    "My nervous system is safe and regulated.",
    "Peace is my natural state of being.",
    "I release what I cannot control.",
    "I move through life with ease and grace.",
    "Every breath brings me deeper into calm.",
    "I am grounded, centered, and serene.",
    "My mind is quiet and my heart is full.",
    "I trust the unfolding of my life.",
    "I am safe in this moment.",
    "Serenity lives within me always.",
    "I choose peace over worry, always.",
    "Calm is always only one breath away.",
    "I am the eye of the storm — still and certain.",
    "My inner peace cannot be disturbed.",
    "I rest deeply and wake up restored.",
    "Tranquility is my gift to myself.",
    "I am held. I am safe. I am calm.",
];

const CAREER: &[&str] = &[
    "My work creates extraordinary impact.",
    "I am recognized and rewarded for my brilliance.",
    "Opportunities I deserve come to me naturally.",
    "I am building something that truly matters.",
    "My career grows in full alignment with my purpose.",
    "I attract the right collaborators and clients.",
    "Success comes naturally to me.",
    "I do work I love and it pays me abundantly.",
    "My unique skills are in high demand.",
    "I lead with vision and execute with precision.",
    "Every step I take moves me toward my dream work.",
    "I am exactly where I need to be right now.",
    "My ambition is matched by my ability.",
    "Doors open for me wherever I go.",
    "I create my own success on my own terms.",
    "I am undeniable in my field.",
    "My work is my art and the world pays for it.",
    "I am becoming the person my future self is proud of.",
    "Everything I touch turns into growth.",
    "My best career chapter is the one I'm writing now.",
];

const FEMININE_ENERGY: &[&str] = &[
    "My femininity is my greatest power.",
    "I lead with softness and it moves mountains.",
    "I receive as naturally as I give.",
    "My intuition is my most trusted guide.",
    "I am magnetic, radiant, and deeply alive.",
    "I allow myself to be fully nourished.",
    "My body is a temple I honor daily.",
    "I embody grace in everything I do.",
    "I am in flow with my natural rhythms.",
    "My softness is strength.",
    "I attract what I am — beauty, depth, and light.",
    "I move through the world with elegance and ease.",
    "My feminine essence draws abundance to me.",
    "I am enough in my most natural state.",
    "I radiate a warmth that touches everyone I meet.",
    "I am a woman who knows herself completely.",
    "I am the divine feminine, expressed fully.",
    "Being a woman is my greatest gift.",
    "My presence is a luxury.",
    "I bloom in my own perfect time.",
];

const RELATIONSHIPS: &[&str] = &[
    "My relationships are built on trust and depth.",
    "I am surrounded by people who celebrate me.",
    "I attract soul-level connections.",
    "The people in my life bring out my best.",
    "I communicate with openness and authenticity.",
    "I set boundaries that honor my peace.",
    "I am a joy to be around.",
    "My connections deepen and flourish naturally.",
    "I choose relationships that evolve me.",
    "I am valued in every relationship I'm in.",
    "Safe, nourishing connection is my birthright.",
    "I show up fully in my relationships.",
    "I attract friends who feel like family.",
    "My circle is small, intentional, and extraordinary.",
    "I release relationships that no longer serve me with love.",
    "I give and receive freely in all my connections.",
    "My energy draws in the right people every time.",
    "I am deeply seen by the people who matter.",
    "Every relationship I have is a reflection of my inner love.",
    "I belong to a community that lifts me up.",
];

const SELF_WORTH: &[&str] = &[
    "I am inherently valuable — no achievement required.",
    "My worth is not up for debate.",
    "I treat myself the way I deserve to be treated.",
    "I am proud of who I am becoming.",
    "I no longer shrink to make others comfortable.",
    "I deserve the best — and I accept it.",
    "My needs matter and I honor them.",
    "I see myself clearly and I love what I see.",
    "I am worthy of respect, love, and abundance.",
    "I release the need for anyone's approval.",
    "I belong in every room I enter.",
    "My value is not determined by others' opinions.",
    "I am whole, complete, and enough.",
    "Self-love is not selfish — it is essential.",
    "I choose myself first, always.",
    "My worth was never something to earn.",
    "I am allowed to take up space.",
    "I am someone worth knowing deeply.",
    "Everything I am is already enough.",
    "I honor myself the way I honor those I love most.",
];

const FEAR: &[&str] = &[
    "I move through fear with quiet courage.",
    "The life I want is on the other side of this.",
    "Fear is just excitement waiting for direction.",
    "I am brave enough to begin.",
    "My courage grows every time I act despite fear.",
    "I trust myself to handle whatever comes.",
    "I release the past and step into possibility.",
    "Fear is not a stop sign — it is an invitation.",
    "I am safe to take up space and be fully seen.",
    "Every step forward dissolves the fear behind me.",
    "I choose expansion over contraction.",
    "The unknown holds gifts I haven't imagined yet.",
    "I breathe into discomfort and grow.",
    "I am supported as I move through uncertainty.",
    "My future self is cheering me on right now.",
    "I am stronger than any fear I face.",
    "Each day I become a little bolder.",
    "I walk through the fear and find freedom on the other side.",
    "Courage is my natural state when I remember who I am.",
    "I am ready. I have always been ready.",
];

const BODY: &[&str] = &[
    "My body is beautiful exactly as it is.",
    "I am grateful for everything my body does for me.",
    "I nourish my body with love and intention.",
    "My body grows stronger and more radiant every day.",
    "I am at home in my body.",
    "I move my body with pleasure and joy.",
    "My body is my partner, not my enemy.",
    "I treat my body like the luxury it is.",
    "Health and vitality flow through every cell.",
    "I listen to my body with kindness and curiosity.",
    "My energy is vibrant and sustainable.",
    "I glow from the inside out.",
    "I deserve to feel incredible in my skin every day.",
    "My body is a reflection of the love I give it.",
    "I am becoming more radiant every day.",
    "My body knows how to heal, thrive, and shine.",
    "I choose foods and movement that make me feel alive.",
    "My body is strong, capable, and worthy of love.",
    "I am comfortable in my skin.",
    "Every day my body and I grow closer together.",
];

const AREA_POOLS: &[(LifeArea, &[&str])] = &[
    (LifeArea::Money, MONEY),
    (LifeArea::Confidence, CONFIDENCE),
    (LifeArea::Love, LOVE),
    (LifeArea::Calm, CALM),
    (LifeArea::Career, CAREER),
    (LifeArea::FeminineEnergy, FEMININE_ENERGY),
    (LifeArea::Relationships, RELATIONSHIPS),
    (LifeArea::SelfWorth, SELF_WORTH),
    (LifeArea::Fear, FEAR),
    (LifeArea::Body, BODY),
];

static ALL: Lazy<Vec<Affirmation>> = Lazy::new(|| {
    AREA_POOLS
        .iter()
        .flat_map(|(area, texts)| texts.iter().map(|text| Affirmation { text, area: *area }))
        .collect()
});

/// The full affirmation pool, filtered to the requested areas (all areas
/// when the filter is empty) and shuffled for presentation.
pub fn feed(areas: &[LifeArea]) -> Vec<Affirmation> {
    let mut pool: Vec<Affirmation> = if areas.is_empty() {
        ALL.clone()
    } else {
        ALL.iter()
            .filter(|a| areas.contains(&a.area))
            .cloned()
            .collect()
    };
    pool.shuffle(&mut rand::thread_rng());
    pool
}

/// Draw one affirmation text uniformly at random, for notification payloads.
pub fn random_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ALL.choose(rng)
        .map(|a| a.text)
        .unwrap_or("I am exactly where I need to be right now.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_area_carries_twenty_lines() {
        for (area, texts) in AREA_POOLS {
            assert_eq!(texts.len(), 20, "pool for {:?}", area);
        }
        assert_eq!(ALL.len(), 200);
    }

    #[test]
    fn test_feed_without_filter_returns_whole_pool() {
        assert_eq!(feed(&[]).len(), ALL.len());
    }

    #[test]
    fn test_feed_filters_by_area() {
        let items = feed(&[LifeArea::Calm, LifeArea::Fear]);
        assert_eq!(items.len(), 40);
        assert!(items
            .iter()
            .all(|a| a.area == LifeArea::Calm || a.area == LifeArea::Fear));
    }

    #[test]
    fn test_random_message_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let message = random_message(&mut rng);
            assert!(ALL.iter().any(|a| a.text == message));
        }
    }

    #[test]
    fn test_area_names_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_string(&LifeArea::FeminineEnergy).unwrap(),
            "\"Feminine Energy\""
        );
        assert_eq!(
            serde_json::to_string(&LifeArea::SelfWorth).unwrap(),
            "\"Self-Worth\""
        );
        assert_eq!(serde_json::to_string(&LifeArea::Money).unwrap(), "\"Money\"");
    }
}
