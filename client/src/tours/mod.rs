//! Product tour catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tour is a carousel over static slide content. The catalog names the
//! tour, where leaving it early goes (the tour library) and where finishing
//! it goes (the product area it introduces).

pub mod content;


use carousel::{Background, CarouselConfig, Slide};

use self::content::{SlideBody, SlideSpec};

/// Where `exit()` sends the user.
pub const EXIT_ROUTE: &str = "/tours";

/// Autoplay period for tours that advance on their own.
pub const PITCH_AUTOPLAY_MS: u32 = 8000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TourKind {
    Compliance,
    CoreTab,
    FieldManagement,
    Financial,
    Hr,
    ItCommandCenter,
    PreConstruction,
    Safety,
    Quality,
    ExecutivePitch,
    Example,
}

impl TourKind {
    pub const ALL: [Self; 11] = [
        Self::Compliance,
        Self::CoreTab,
        Self::FieldManagement,
        Self::Financial,
        Self::Hr,
        Self::ItCommandCenter,
        Self::PreConstruction,
        Self::Safety,
        Self::Quality,
        Self::ExecutivePitch,
        Self::Example,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Compliance => "compliance",
            Self::CoreTab => "core-tab",
            Self::FieldManagement => "field-management",
            Self::Financial => "financial",
            Self::Hr => "hr",
            Self::ItCommandCenter => "it-command-center",
            Self::PreConstruction => "pre-construction",
            Self::Safety => "safety",
            Self::Quality => "quality",
            Self::ExecutivePitch => "executive-pitch",
            Self::Example => "example",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tour| tour.slug() == slug)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Compliance => "Compliance",
            Self::CoreTab => "Core Tab",
            Self::FieldManagement => "Field Management",
            Self::Financial => "Financial",
            Self::Hr => "HR",
            Self::ItCommandCenter => "IT Command Center",
            Self::PreConstruction => "Pre-Construction",
            Self::Safety => "Safety",
            Self::Quality => "Quality & Warranty",
            Self::ExecutivePitch => "Executive Overview",
            Self::Example => "Getting Started",
        }
    }

    /// Route opened when the tour is completed.
    #[must_use]
    pub fn destination(self) -> &'static str {
        match self {
            Self::PreConstruction => "/workspace/bids",
            Self::FieldManagement => "/workspace/deliveries",
            Self::CoreTab => "/workspace/stages",
            Self::Financial => "/workspace/estimates",
            Self::Compliance
            | Self::Hr
            | Self::ItCommandCenter
            | Self::Safety
            | Self::Quality
            | Self::ExecutivePitch
            | Self::Example => "/",
        }
    }

    /// Label of the button that completes the tour.
    #[must_use]
    pub fn complete_label(self) -> &'static str {
        match self {
            Self::PreConstruction => "Open Bid Management",
            Self::FieldManagement => "Open Delivery Tracking",
            Self::CoreTab => "Open Stage Tracking",
            Self::Financial => "Open Estimates",
            _ => "Go to dashboard",
        }
    }

    /// Backdrop shared by every slide of the tour.
    #[must_use]
    pub fn background(self) -> Background {
        let (from, to) = match self {
            Self::Compliance => ("#1e3a5f", "#2f6690"),
            Self::CoreTab => ("#243b55", "#141e30"),
            Self::FieldManagement => ("#7c4a03", "#c77d0a"),
            Self::Financial => ("#0b4f3c", "#1a7f5a"),
            Self::Hr => ("#4a235a", "#7d3c98"),
            Self::ItCommandCenter => ("#0f2027", "#2c5364"),
            Self::PreConstruction => ("#3a3f44", "#5c6670"),
            Self::Safety => ("#8e1b1b", "#d35400"),
            Self::Quality => ("#1b4965", "#5fa8d3"),
            Self::ExecutivePitch => ("#111111", "#3d3d3d"),
            Self::Example => ("#2d3561", "#5561a0"),
        };
        Background::Gradient(format!("linear-gradient(135deg, {from} 0%, {to} 100%)"))
    }

    #[must_use]
    pub fn config(self) -> CarouselConfig {
        let config = CarouselConfig::default().with_class_name(format!("tour--{}", self.slug()));
        match self {
            Self::ExecutivePitch => config.with_autoplay(PITCH_AUTOPLAY_MS),
            _ => config,
        }
    }

    fn specs(self) -> &'static [SlideSpec] {
        match self {
            Self::Compliance => content::COMPLIANCE,
            Self::CoreTab => content::CORE_TAB,
            Self::FieldManagement => content::FIELD_MANAGEMENT,
            Self::Financial => content::FINANCIAL,
            Self::Hr => content::HR,
            Self::ItCommandCenter => content::IT_COMMAND_CENTER,
            Self::PreConstruction => content::PRE_CONSTRUCTION,
            Self::Safety => content::SAFETY,
            Self::Quality => content::QUALITY,
            Self::ExecutivePitch => content::EXECUTIVE_PITCH,
            Self::Example => content::EXAMPLE,
        }
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.specs().len()
    }

    /// Slide list for a fresh carousel. The last slide is the final one.
    #[must_use]
    pub fn slides(self) -> Vec<Slide<SlideBody>> {
        let specs = self.specs();
        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let slide = Slide::new(spec.id, spec.title, SlideBody::from(spec)).with_background(self.background());
                if i + 1 == specs.len() { slide.as_final() } else { slide }
            })
            .collect()
    }
}
