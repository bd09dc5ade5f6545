//! Copy and media for the page sections.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service { name: "Braids", description: "Knotless, box and feed-in braids in every length.", price: "From KES 2,500" },
    Service { name: "Silk Press", description: "Heat-styled shine with lasting body and movement.", price: "From KES 2,000" },
    Service { name: "Locs", description: "Starter locs, retwists and loc styling.", price: "From KES 1,800" },
    Service { name: "Wig Install", description: "Frontal and closure installs, customised to you.", price: "From KES 3,000" },
    Service { name: "Treatments", description: "Deep conditioning, protein and scalp care.", price: "From KES 1,500" },
    Service { name: "Colour", description: "Highlights, full colour and tone refresh.", price: "From KES 3,500" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSize {
    Small,
    Medium,
    Large,
}

impl TileSize {
    pub fn class(self) -> &'static str {
        match self {
            TileSize::Small => "tile-small",
            TileSize::Medium => "tile-medium",
            TileSize::Large => "tile-large",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub size: TileSize,
    pub src: &'static str,
}

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.jpg";

macro_rules! gallery {
    ($(($id:literal, $size:ident)),* $(,)?) => {
        [$(GalleryItem {
            id: $id,
            title: concat!("Hair Transformation ", $id),
            size: TileSize::$size,
            src: concat!("/assets/gallery/", $id, ".jpg"),
        }),*]
    };
}

pub const GALLERY: [GalleryItem; 11] = gallery![
    (2, Small),
    (1, Large),
    (4, Small),
    (3, Medium),
    (7, Small),
    (5, Medium),
    (6, Large),
    (8, Small),
    (11, Small),
    (9, Medium),
    (10, Large),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub quote: &'static str,
    pub rating: u8,
    pub video: Option<&'static str>,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial { id: 1, name: "Wanjiru K.", quote: "My braids lasted six weeks and still looked fresh.", rating: 5, video: Some("/assets/video/wanjiru.mp4") },
    Testimonial { id: 2, name: "Aisha M.", quote: "The silk press was exactly what I asked for.", rating: 5, video: None },
    Testimonial { id: 3, name: "Grace O.", quote: "Warm welcome, on time, and my scalp has never felt better.", rating: 5, video: Some("/assets/video/grace.mp4") },
    Testimonial { id: 4, name: "Mercy N.", quote: "Booked on WhatsApp in a minute. Will be back.", rating: 4, video: None },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub const TEAM: [TeamMember; 1] = [TeamMember {
    name: "Anitah",
    role: "Founder & Lead Stylist",
    bio: "Over a decade of braiding, styling and natural hair care.",
    image: "/assets/team/anitah.jpg",
}];

/// One stacked hero card: size in percent of the stack, CSS transform and
/// paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub width: u8,
    pub height: u8,
    pub transform: &'static str,
    pub z_index: u8,
}

impl CardPlacement {
    pub fn style(&self) -> String {
        format!(
            "width: {}%; height: {}%; transform: {}; z-index: {};",
            self.width, self.height, self.transform, self.z_index
        )
    }
}

const fn card(width: u8, height: u8, transform: &'static str, z_index: u8) -> CardPlacement {
    CardPlacement { width, height, transform, z_index }
}

pub const CARD_SHUFFLE_MS: u32 = 4000;

pub const CARD_CONFIGURATIONS: [[CardPlacement; 3]; 4] = [
    [
        card(100, 100, "translateX(-8px) translateY(12px) rotate(-3deg)", 1),
        card(92, 92, "translateX(6px) translateY(6px) rotate(1deg)", 2),
        card(85, 88, "translateX(12px) translateY(-6px) rotate(2deg)", 3),
    ],
    [
        card(85, 88, "translateX(-12px) translateY(10px) rotate(-2deg)", 1),
        card(100, 100, "translateX(6px) translateY(6px) rotate(1deg)", 2),
        card(92, 92, "translateX(10px) translateY(-10px) rotate(3deg)", 3),
    ],
    [
        card(92, 92, "translateX(-8px) translateY(8px) rotate(-1deg)", 1),
        card(85, 88, "translateX(12px) translateY(-8px) rotate(2.5deg)", 2),
        card(100, 100, "translateX(4px) translateY(-4px) rotate(1.5deg)", 3),
    ],
    [
        card(88, 90, "translateX(8px) translateY(12px) rotate(2deg)", 1),
        card(85, 88, "translateX(-6px) translateY(-6px) rotate(-1.5deg)", 2),
        card(92, 92, "translateX(3px) translateY(3px) rotate(0.5deg)", 3),
    ],
];

pub fn next_configuration(current: usize) -> usize {
    (current + 1) % CARD_CONFIGURATIONS.len()
}

pub const TYPEWRITER_START_MS: u32 = 350;
pub const TYPEWRITER_STEP_MS: u32 = 140;

/// Character-by-character reveal of a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typewriter {
    full: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(full: &'static str) -> Self {
        Self { full, shown: 0 }
    }

    pub fn text(&self) -> &'static str {
        let end = self.full.char_indices().nth(self.shown).map_or(self.full.len(), |(i, _)| i);
        &self.full[..end]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.full.chars().count()
    }

    pub fn tick(self) -> Self {
        if self.is_done() {
            self
        } else {
            Self { shown: self.shown + 1, ..self }
        }
    }

    pub fn reset(self) -> Self {
        Self::new(self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_cycles_through_every_configuration() {
        let mut current = 0;
        let mut seen = vec![current];
        for _ in 0..CARD_CONFIGURATIONS.len() {
            current = next_configuration(current);
            seen.push(current);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn every_configuration_paints_each_layer_once() {
        for config in CARD_CONFIGURATIONS.iter() {
            let mut layers: Vec<u8> = config.iter().map(|c| c.z_index).collect();
            layers.sort();
            assert_eq!(layers, vec![1, 2, 3]);
        }
    }

    #[test]
    fn typewriter_reveals_one_character_per_tick() {
        let mut writer = Typewriter::new("Anitah");
        assert_eq!(writer.text(), "");
        writer = writer.tick().tick();
        assert_eq!(writer.text(), "An");
        for _ in 0..10 {
            writer = writer.tick();
        }
        assert!(writer.is_done());
        assert_eq!(writer.text(), "Anitah");
        assert_eq!(writer.reset().text(), "");
    }

    #[test]
    fn typewriter_respects_multibyte_names() {
        let writer = Typewriter::new("Zoë").tick().tick().tick();
        assert_eq!(writer.text(), "Zoë");
    }

    #[test]
    fn gallery_paths_follow_ids() {
        assert_eq!(GALLERY[0].src, "/assets/gallery/2.jpg");
        assert_eq!(GALLERY[1].title, "Hair Transformation 1");
    }
}
