use serde::{Deserialize, Serialize};

use super::document::mint_item_id;

/// Hero banner content: scalar fields only, replaced wholesale on save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HeroDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default)]
    pub profile_photo: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ExperienceDocument {
    #[serde(default)]
    pub items: Vec<ExperienceItem>,
}

/// One timeline entry. Order inside `ExperienceDocument::items` is
/// user-controlled and significant (rendered top to bottom).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ExperienceItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub awards: Vec<String>,
}

impl ExperienceItem {
    /// Blank entry with a freshly minted id, ready for the edit form.
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("exp"),
            ..Self::default()
        }
    }
}

impl ExperienceDocument {
    /// New entries go to the front so they are immediately visible.
    pub fn add_blank_item(&mut self) -> &ExperienceItem {
        self.items.insert(0, ExperienceItem::draft());
        &self.items[0]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CertificationsDocument {
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Certificate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub image_url: String,
}

impl Certificate {
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("cert"),
            ..Self::default()
        }
    }
}

impl CertificationsDocument {
    pub fn add_blank_certificate(&mut self) -> &Certificate {
        self.certificates.insert(0, Certificate::draft());
        &self.certificates[0]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub repo: String,
}

impl Project {
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("proj"),
            ..Self::default()
        }
    }
}

impl ProjectsDocument {
    pub fn add_blank_project(&mut self) -> &Project {
        self.projects.insert(0, Project::draft());
        &self.projects[0]
    }
}

/// Tech stack grouped by named category.
///
/// Categories are a list, not a map: the admin controls category order the
/// same way item order is controlled everywhere else, and JSON object key
/// order would not survive serialization reliably.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TechStackDocument {
    #[serde(default)]
    pub categories: Vec<TechCategory>,
    #[serde(default)]
    pub featured: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TechCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestimonialsDocument {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
}

impl Testimonial {
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("quote"),
            ..Self::default()
        }
    }
}

impl TestimonialsDocument {
    pub fn add_blank_testimonial(&mut self) -> &Testimonial {
        self.testimonials.insert(0, Testimonial::draft());
        &self.testimonials[0]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NetworkDocument {
    #[serde(default)]
    pub memberships: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub speaking: String,
    #[serde(default)]
    pub contact_tiles: Vec<ContactTile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SocialLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContactTile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// About/achievements/photos panel.
///
/// `autobiography` is stored as one string; the public site splits it into
/// paragraphs on blank lines at render time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QuickNavDocument {
    #[serde(default)]
    pub autobiography: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub contact_email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Achievement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub has_certificate: bool,
    #[serde(default)]
    pub certificate_image: Option<String>,
}

impl Achievement {
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("ach"),
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Photo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
}

impl Photo {
    pub fn draft() -> Self {
        Self {
            id: mint_item_id("photo"),
            ..Self::default()
        }
    }
}

impl QuickNavDocument {
    pub fn add_blank_achievement(&mut self) -> &Achievement {
        self.achievements.insert(0, Achievement::draft());
        &self.achievements[0]
    }

    pub fn add_blank_photo(&mut self) -> &Photo {
        self.photos.insert(0, Photo::draft());
        &self.photos[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_blank_item_prepends() {
        let mut doc = ExperienceDocument {
            items: vec![ExperienceItem {
                id: "exp-1".into(),
                role: "Engineer".into(),
                ..ExperienceItem::default()
            }],
        };

        doc.add_blank_item();

        assert_eq!(doc.items.len(), 2);
        assert!(doc.items[0].id.starts_with("exp-"));
        assert_eq!(doc.items[1].id, "exp-1");
    }

    #[test]
    fn test_add_blank_project_prepends() {
        let mut doc = ProjectsDocument::default();
        doc.add_blank_project();
        doc.add_blank_project();

        assert_eq!(doc.projects.len(), 2);
        assert!(doc.projects[0].id.starts_with("proj-"));
    }

    #[test]
    fn test_missing_list_fields_parse_as_empty() {
        let doc: NetworkDocument = serde_json::from_str("{}").unwrap();

        assert!(doc.memberships.is_empty());
        assert!(doc.social_links.is_empty());
        assert!(doc.contact_tiles.is_empty());
        assert_eq!(doc.speaking, "");
    }

    #[test]
    fn test_quick_nav_round_trips() {
        let mut doc = QuickNavDocument {
            autobiography: "First paragraph.\n\nSecond paragraph.".into(),
            contact_email: "me@example.com".into(),
            ..QuickNavDocument::default()
        };
        doc.add_blank_photo();

        let json = serde_json::to_value(&doc).unwrap();
        let back: QuickNavDocument = serde_json::from_value(json).unwrap();

        assert_eq!(doc, back);
    }
}
