use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

use super::entities::{
    CertificationsDocument, ExperienceDocument, HeroDocument, NetworkDocument, ProjectsDocument,
    QuickNavDocument, TechStackDocument, TestimonialsDocument,
};

/// The eight independent portfolio sections. Each owns exactly one stored
/// document; there are no references between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    Experience,
    Certifications,
    Projects,
    TechStack,
    Testimonials,
    Network,
    QuickNav,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Experience,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::TechStack,
        SectionKind::Testimonials,
        SectionKind::Network,
        SectionKind::QuickNav,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Experience => "experience",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
            SectionKind::TechStack => "tech-stack",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Network => "network",
            SectionKind::QuickNav => "quick-nav",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mint a list-item id: type prefix plus current time in millis.
///
/// Unique within one edit session, which is all the UI needs; there is no
/// global uniqueness guarantee across concurrent editors.
pub fn mint_item_id(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_millis())
}

/// Addresses one file-bearing field of a document.
///
/// `item_id` is set when the field lives inside a list item (a certificate
/// image, an achievement certificate); scalar fields such as the hero
/// banner leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSlot {
    pub field: String,
    #[serde(default)]
    pub item_id: Option<String>,
}

impl FileSlot {
    pub fn scalar(field: &str) -> Self {
        Self {
            field: field.to_string(),
            item_id: None,
        }
    }

    pub fn item(field: &str, item_id: &str) -> Self {
        Self {
            field: field.to_string(),
            item_id: Some(item_id.to_string()),
        }
    }
}

/// Identifies the list item a pending delete confirmation refers to.
///
/// For primitive-string lists (memberships, awards, tags, tech items) the
/// id is the positional index, which is stable for the duration of one
/// edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTarget {
    pub list: String,
    pub id: String,
}

impl DeleteTarget {
    pub fn new(list: &str, id: impl Into<String>) -> Self {
        Self {
            list: list.to_string(),
            id: id.into(),
        }
    }
}

/// Behavior every section document shares: identity, serialization into the
/// stored body, blob-slot resolution and confirmed-delete removal.
pub trait ContentDocument: Clone + Send + Sync + 'static {
    fn kind(&self) -> SectionKind;

    fn to_body(&self) -> Result<JsonValue, serde_json::Error>;

    /// URL currently held by a file slot, if the slot exists. Used to
    /// queue the replaced blob for cleanup after a successful commit.
    fn url_at(&self, _slot: &FileSlot) -> Option<String> {
        None
    }

    /// Substitute an uploaded public URL into the slot's field, matching
    /// list items by entity id. Returns false when nothing matched.
    fn apply_uploaded_url(&mut self, _slot: &FileSlot, _url: &str) -> bool {
        false
    }

    /// Remove the item a confirmed delete prompt referred to. Returns
    /// false when the target no longer exists.
    fn remove_item(&mut self, target: &DeleteTarget) -> bool;
}

fn parse_index(id: &str) -> Option<usize> {
    id.parse::<usize>().ok()
}

fn remove_at<T>(items: &mut Vec<T>, id: &str) -> bool {
    match parse_index(id) {
        Some(i) if i < items.len() => {
            items.remove(i);
            true
        }
        _ => false,
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

impl ContentDocument for HeroDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Hero
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn url_at(&self, slot: &FileSlot) -> Option<String> {
        match slot.field.as_str() {
            "banner_image" => Some(self.banner_image.clone()),
            "profile_photo" => Some(self.profile_photo.clone()),
            "resume_url" => Some(self.resume_url.clone()),
            _ => None,
        }
    }

    fn apply_uploaded_url(&mut self, slot: &FileSlot, url: &str) -> bool {
        match slot.field.as_str() {
            "banner_image" => self.banner_image = url.to_string(),
            "profile_photo" => self.profile_photo = url.to_string(),
            "resume_url" => self.resume_url = url.to_string(),
            _ => return false,
        }
        true
    }

    fn remove_item(&mut self, _target: &DeleteTarget) -> bool {
        false
    }
}

impl ContentDocument for ExperienceDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Experience
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        if target.list == "items" {
            return remove_by_id(&mut self.items, &target.id, |i| &i.id);
        }
        if let Some(item_id) = target.list.strip_prefix("awards:") {
            if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
                return remove_at(&mut item.awards, &target.id);
            }
        }
        false
    }
}

impl ContentDocument for CertificationsDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Certifications
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn url_at(&self, slot: &FileSlot) -> Option<String> {
        if slot.field != "image_url" {
            return None;
        }
        let id = slot.item_id.as_deref()?;
        self.certificates
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.image_url.clone())
    }

    fn apply_uploaded_url(&mut self, slot: &FileSlot, url: &str) -> bool {
        if slot.field != "image_url" {
            return false;
        }
        let Some(id) = slot.item_id.as_deref() else {
            return false;
        };
        match self.certificates.iter_mut().find(|c| c.id == id) {
            Some(cert) => {
                cert.image_url = url.to_string();
                true
            }
            None => false,
        }
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        if target.list == "certificates" {
            return remove_by_id(&mut self.certificates, &target.id, |c| &c.id);
        }
        false
    }
}

impl ContentDocument for ProjectsDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Projects
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        if target.list == "projects" {
            return remove_by_id(&mut self.projects, &target.id, |p| &p.id);
        }
        if let Some(project_id) = target.list.strip_prefix("tags:") {
            if let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) {
                return remove_at(&mut project.tags, &target.id);
            }
        }
        false
    }
}

impl ContentDocument for TechStackDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::TechStack
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        if target.list == "categories" {
            let before = self.categories.len();
            self.categories.retain(|c| c.name != target.id);
            return self.categories.len() != before;
        }
        if target.list == "featured" {
            return remove_at(&mut self.featured, &target.id);
        }
        if let Some(name) = target.list.strip_prefix("category:") {
            if let Some(cat) = self.categories.iter_mut().find(|c| c.name == name) {
                return remove_at(&mut cat.items, &target.id);
            }
        }
        false
    }
}

impl ContentDocument for TestimonialsDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Testimonials
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        if target.list == "testimonials" {
            return remove_by_id(&mut self.testimonials, &target.id, |t| &t.id);
        }
        false
    }
}

impl ContentDocument for NetworkDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::Network
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        match target.list.as_str() {
            "memberships" => remove_at(&mut self.memberships, &target.id),
            "social_links" => remove_at(&mut self.social_links, &target.id),
            "contact_tiles" => remove_at(&mut self.contact_tiles, &target.id),
            _ => false,
        }
    }
}

impl ContentDocument for QuickNavDocument {
    fn kind(&self) -> SectionKind {
        SectionKind::QuickNav
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn url_at(&self, slot: &FileSlot) -> Option<String> {
        let id = slot.item_id.as_deref()?;
        match slot.field.as_str() {
            "certificate_image" => self
                .achievements
                .iter()
                .find(|a| a.id == id)
                .and_then(|a| a.certificate_image.clone()),
            "image_url" => self
                .photos
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.image_url.clone()),
            _ => None,
        }
    }

    fn apply_uploaded_url(&mut self, slot: &FileSlot, url: &str) -> bool {
        let Some(id) = slot.item_id.as_deref() else {
            return false;
        };
        match slot.field.as_str() {
            "certificate_image" => {
                match self.achievements.iter_mut().find(|a| a.id == id) {
                    Some(ach) => {
                        ach.certificate_image = Some(url.to_string());
                        ach.has_certificate = true;
                        true
                    }
                    None => false,
                }
            }
            "image_url" => match self.photos.iter_mut().find(|p| p.id == id) {
                Some(photo) => {
                    photo.image_url = url.to_string();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        match target.list.as_str() {
            "achievements" => remove_by_id(&mut self.achievements, &target.id, |a| &a.id),
            "photos" => remove_by_id(&mut self.photos, &target.id, |p| &p.id),
            _ => false,
        }
    }
}

/// A section document of any kind, as the web layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDocument {
    Hero(HeroDocument),
    Experience(ExperienceDocument),
    Certifications(CertificationsDocument),
    Projects(ProjectsDocument),
    TechStack(TechStackDocument),
    Testimonials(TestimonialsDocument),
    Network(NetworkDocument),
    QuickNav(QuickNavDocument),
}

impl SectionDocument {
    /// The built-in fallback document for a kind (all lists empty, all
    /// scalars blank). Served whenever nothing valid is stored.
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => Self::Hero(HeroDocument::default()),
            SectionKind::Experience => Self::Experience(ExperienceDocument::default()),
            SectionKind::Certifications => Self::Certifications(CertificationsDocument::default()),
            SectionKind::Projects => Self::Projects(ProjectsDocument::default()),
            SectionKind::TechStack => Self::TechStack(TechStackDocument::default()),
            SectionKind::Testimonials => Self::Testimonials(TestimonialsDocument::default()),
            SectionKind::Network => Self::Network(NetworkDocument::default()),
            SectionKind::QuickNav => Self::QuickNav(QuickNavDocument::default()),
        }
    }

    /// Parse a stored body for the given kind. Absent list fields become
    /// empty lists; a type mismatch anywhere fails the whole parse.
    pub fn from_body(kind: SectionKind, body: JsonValue) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::Hero => Self::Hero(serde_json::from_value(body)?),
            SectionKind::Experience => Self::Experience(serde_json::from_value(body)?),
            SectionKind::Certifications => Self::Certifications(serde_json::from_value(body)?),
            SectionKind::Projects => Self::Projects(serde_json::from_value(body)?),
            SectionKind::TechStack => Self::TechStack(serde_json::from_value(body)?),
            SectionKind::Testimonials => Self::Testimonials(serde_json::from_value(body)?),
            SectionKind::Network => Self::Network(serde_json::from_value(body)?),
            SectionKind::QuickNav => Self::QuickNav(serde_json::from_value(body)?),
        })
    }
}

macro_rules! each_section {
    ($self:expr, $doc:ident => $body:expr) => {
        match $self {
            SectionDocument::Hero($doc) => $body,
            SectionDocument::Experience($doc) => $body,
            SectionDocument::Certifications($doc) => $body,
            SectionDocument::Projects($doc) => $body,
            SectionDocument::TechStack($doc) => $body,
            SectionDocument::Testimonials($doc) => $body,
            SectionDocument::Network($doc) => $body,
            SectionDocument::QuickNav($doc) => $body,
        }
    };
}

impl ContentDocument for SectionDocument {
    fn kind(&self) -> SectionKind {
        each_section!(self, doc => doc.kind())
    }

    fn to_body(&self) -> Result<JsonValue, serde_json::Error> {
        each_section!(self, doc => doc.to_body())
    }

    fn url_at(&self, slot: &FileSlot) -> Option<String> {
        each_section!(self, doc => doc.url_at(slot))
    }

    fn apply_uploaded_url(&mut self, slot: &FileSlot, url: &str) -> bool {
        each_section!(self, doc => doc.apply_uploaded_url(slot, url))
    }

    fn remove_item(&mut self, target: &DeleteTarget) -> bool {
        each_section!(self, doc => doc.remove_item(target))
    }
}
