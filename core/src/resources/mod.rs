/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Registry of the administrable entities.
//!
//! Every entity the portal manages implements [`Resource`]. The trait carries
//! everything the generic layers need: the payload types accepted by the API,
//! the field rules used for validation and form rendering, filters, ordering
//! and the admin table columns. [`ResourceKind`] is the runtime handle used
//! when an entity is only known by its URL slug.

mod contact;
mod course;
mod department;
mod event;
mod faculty;
mod message;
mod news;
mod program;
mod society;
mod user;

pub use contact::*;
pub use course::*;
pub use department::*;
pub use event::*;
pub use faculty::*;
pub use message::*;
pub use news::*;
pub use program::*;
pub use society::*;
pub use user::*;

use crate::gateway::{self, GatewayError};
use crate::input::{check_email, is_blank, parse_datetime};
use crate::table::TableColumn;
use crate::types::*;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, Select, sea_query::Condition,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

pub type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;
pub type ColumnOf<R> = <<R as Resource>::Entity as EntityTrait>::Column;

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::Active>;
    type Model: IntoActiveModel<Self::Active> + sea_orm::FromQueryResult + Serialize + Clone + Send + Sync + 'static;
    type Active: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;
    type Id: Into<PrimaryKeyValue<Self::Entity>>
        + FromStr
        + Display
        + PartialEq
        + Clone
        + Send
        + Sync
        + 'static;
    type Create: DeserializeOwned + Send + 'static;
    type Patch: DeserializeOwned + Default + Send + 'static;

    const KIND: ResourceKind;

    fn fields() -> &'static [FieldSpec];
    fn id(model: &Self::Model) -> Self::Id;
    /// Human readable name used in select options and lookup columns.
    fn label(model: &Self::Model) -> String;
    fn new_active(body: Self::Create) -> Self::Active;
    /// Applies only the fields present in the patch and bumps `updatedAt`.
    fn apply_patch(active: &mut Self::Active, patch: Self::Patch);
    fn columns(lookups: &Lookups) -> Vec<TableColumn<Self::Model>>;

    fn create_checks(_body: &Self::Create) -> Vec<Check<Self>>
    where
        Self: Sized,
    {
        Vec::new()
    }

    fn patch_checks(_patch: &Self::Patch) -> Vec<Check<Self>>
    where
        Self: Sized,
    {
        Vec::new()
    }

    fn filter(_params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        Ok(Condition::all())
    }

    fn order(select: Select<Self::Entity>) -> Select<Self::Entity> {
        select
    }

    fn image_patch(_url: String) -> Option<Self::Patch> {
        None
    }
}

/// Service level integrity rule evaluated before a write.
pub enum Check<R: Resource> {
    Reference(Reference),
    Unique {
        column: ColumnOf<R>,
        value: String,
        label: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Department(Uuid),
    Program(i32),
    Society(Uuid),
}

impl Reference {
    pub async fn ensure_exists<C: ConnectionTrait>(&self, db: &C) -> Result<(), GatewayError> {
        let exists = match self {
            Reference::Department(id) => EDepartment::find_by_id(*id).one(db).await?.is_some(),
            Reference::Program(id) => EProgram::find_by_id(*id).one(db).await?.is_some(),
            Reference::Society(id) => ESociety::find_by_id(*id).one(db).await?.is_some(),
        };

        if exists {
            Ok(())
        } else {
            Err(GatewayError::Constraint(format!(
                "{} {} does not exist",
                self.kind().singular(),
                self.id()
            )))
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Reference::Department(_) => ResourceKind::Department,
            Reference::Program(_) => ResourceKind::Program,
            Reference::Society(_) => ResourceKind::Society,
        }
    }

    fn id(&self) -> String {
        match self {
            Reference::Department(id) | Reference::Society(id) => id.to_string(),
            Reference::Program(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Url,
    Number,
    Checkbox,
    Date,
    DateTime,
    Select(&'static [&'static str]),
    Reference(ResourceKind),
    Image,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key, camelCase.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Prefilled value on the add form.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: None,
        }
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

/// Checks required fields and simple value formats of a JSON payload.
///
/// With `partial` set, absent fields are accepted, but a present required
/// field still has to be non-blank.
pub fn validate_payload(
    fields: &[FieldSpec],
    body: &Value,
    partial: bool,
) -> Result<(), GatewayError> {
    let Some(object) = body.as_object() else {
        return Err(GatewayError::validation("Request body must be a JSON object"));
    };

    let mut errors = BTreeMap::new();

    for field in fields {
        let value = object.get(field.name);
        let blank = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => is_blank(s),
            Some(_) => false,
        };

        if blank {
            if field.required && (!partial || value.is_some()) {
                errors.insert(field.name.to_string(), format!("{} is required", field.label));
            }
            continue;
        }

        let Some(Value::String(s)) = value else {
            continue;
        };

        let problem = match field.kind {
            FieldKind::Email if !check_email(s) => {
                Some(format!("{} must be a valid email address", field.label))
            }
            FieldKind::Select(options) if !options.contains(&s.as_str()) => Some(format!(
                "{} must be one of: {}",
                field.label,
                options.join(", ")
            )),
            FieldKind::Date | FieldKind::DateTime if parse_datetime(s).is_err() => {
                Some(format!("{} must be a valid date", field.label))
            }
            FieldKind::Number if s.trim().parse::<f64>().is_err() => {
                Some(format!("{} must be a number", field.label))
            }
            _ => None,
        };

        if let Some(problem) = problem {
            errors.insert(field.name.to_string(), problem);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(GatewayError::Validation {
            message: errors.values().cloned().collect::<Vec<_>>().join(", "),
            fields: errors,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Department,
    Faculty,
    Program,
    Course,
    News,
    Event,
    Society,
    ChairpersonMessage,
    ViceChancellorMessage,
    ContactSubmission,
    User,
}

/// Runs `$body` with `$r` bound to the [`Resource`] type behind a [`ResourceKind`].
#[macro_export]
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            $crate::resources::ResourceKind::Department => {
                type $r = $crate::resources::Department;
                $body
            }
            $crate::resources::ResourceKind::Faculty => {
                type $r = $crate::resources::Faculty;
                $body
            }
            $crate::resources::ResourceKind::Program => {
                type $r = $crate::resources::Program;
                $body
            }
            $crate::resources::ResourceKind::Course => {
                type $r = $crate::resources::Course;
                $body
            }
            $crate::resources::ResourceKind::News => {
                type $r = $crate::resources::News;
                $body
            }
            $crate::resources::ResourceKind::Event => {
                type $r = $crate::resources::Event;
                $body
            }
            $crate::resources::ResourceKind::Society => {
                type $r = $crate::resources::Society;
                $body
            }
            $crate::resources::ResourceKind::ChairpersonMessage => {
                type $r = $crate::resources::ChairpersonMessage;
                $body
            }
            $crate::resources::ResourceKind::ViceChancellorMessage => {
                type $r = $crate::resources::ViceChancellorMessage;
                $body
            }
            $crate::resources::ResourceKind::ContactSubmission => {
                type $r = $crate::resources::ContactSubmission;
                $body
            }
            $crate::resources::ResourceKind::User => {
                type $r = $crate::resources::User;
                $body
            }
        }
    };
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Department,
        ResourceKind::Faculty,
        ResourceKind::Program,
        ResourceKind::Course,
        ResourceKind::News,
        ResourceKind::Event,
        ResourceKind::Society,
        ResourceKind::ChairpersonMessage,
        ResourceKind::ViceChancellorMessage,
        ResourceKind::ContactSubmission,
        ResourceKind::User,
    ];

    /// URL segment under `/api` and `/admin`.
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Department => "departments",
            ResourceKind::Faculty => "faculty",
            ResourceKind::Program => "programs",
            ResourceKind::Course => "courses",
            ResourceKind::News => "news",
            ResourceKind::Event => "events",
            ResourceKind::Society => "societies",
            ResourceKind::ChairpersonMessage => "chairperson-messages",
            ResourceKind::ViceChancellorMessage => "vice-chancellor-messages",
            ResourceKind::ContactSubmission => "admissions",
            ResourceKind::User => "users",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Department => "Department",
            ResourceKind::Faculty => "Faculty member",
            ResourceKind::Program => "Program",
            ResourceKind::Course => "Course",
            ResourceKind::News => "News article",
            ResourceKind::Event => "Event",
            ResourceKind::Society => "Society",
            ResourceKind::ChairpersonMessage => "Chairperson message",
            ResourceKind::ViceChancellorMessage => "Vice chancellor message",
            ResourceKind::ContactSubmission => "Admission inquiry",
            ResourceKind::User => "User",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Department => "Departments",
            ResourceKind::Faculty => "Faculty",
            ResourceKind::Program => "Programs",
            ResourceKind::Course => "Courses",
            ResourceKind::News => "News",
            ResourceKind::Event => "Events",
            ResourceKind::Society => "Societies",
            ResourceKind::ChairpersonMessage => "Chairperson Messages",
            ResourceKind::ViceChancellorMessage => "Vice Chancellor Messages",
            ResourceKind::ContactSubmission => "Admission Inquiries",
            ResourceKind::User => "Users",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Whether anonymous visitors may read the collection.
    pub fn public_read(&self) -> bool {
        !matches!(self, ResourceKind::ContactSubmission | ResourceKind::User)
    }

    pub fn numeric_id(&self) -> bool {
        matches!(self, ResourceKind::Program)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        crate::with_resource!(*self, R => R::fields())
    }

    pub fn has_image(&self) -> bool {
        self.fields()
            .iter()
            .any(|field| field.kind == FieldKind::Image)
    }

    /// Entities referenced through select fields.
    pub fn references(&self) -> Vec<ResourceKind> {
        let mut kinds = Vec::new();

        for field in self.fields() {
            if let FieldKind::Reference(kind) = field.kind {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }

        kinds
    }

    pub async fn options<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<ListItem>, GatewayError> {
        crate::with_resource!(*self, R => options::<R, C>(db).await)
    }

    pub async fn count<C: ConnectionTrait>(&self, db: &C) -> Result<u64, GatewayError> {
        crate::with_resource!(*self, R => gateway::count::<R, C>(db).await)
    }

    /// `NotFound` unless a record with this id exists.
    pub async fn ensure_exists<C: ConnectionTrait>(&self, db: &C, id: &str) -> Result<(), GatewayError> {
        crate::with_resource!(*self, R => {
            let id = gateway::parse_id::<R>(id)?;
            gateway::get::<R, C>(db, id).await.map(|_| ())
        })
    }

    /// Points the `imageUrl` of an existing record at an uploaded file.
    pub async fn attach_image<C: ConnectionTrait>(
        &self,
        db: &C,
        id: &str,
        url: String,
    ) -> Result<(), GatewayError> {
        crate::with_resource!(*self, R => attach_image::<R, C>(db, id, url).await)
    }
}

pub async fn options<R: Resource, C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<ListItem>, GatewayError> {
    let models = gateway::find::<R, C>(db, &HashMap::new()).await?;

    Ok(models
        .iter()
        .map(|model| ListItem {
            id: R::id(model).to_string(),
            name: R::label(model),
        })
        .collect())
}

async fn attach_image<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: &str,
    url: String,
) -> Result<(), GatewayError> {
    let patch = R::image_patch(url).ok_or_else(|| {
        GatewayError::validation(format!("{} has no image", R::KIND.plural()))
    })?;

    let id = gateway::parse_id::<R>(id)?;
    gateway::update::<R, C>(db, id, patch).await?;
    Ok(())
}

/// Names of referenced records keyed by id, loaded once per page.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    options: HashMap<ResourceKind, Vec<ListItem>>,
}

impl Lookups {
    pub async fn load<C: ConnectionTrait>(
        db: &C,
        kinds: &[ResourceKind],
    ) -> Result<Self, GatewayError> {
        let mut options = HashMap::new();

        for kind in kinds {
            options.insert(*kind, kind.options(db).await?);
        }

        Ok(Self { options })
    }

    pub fn options(&self, kind: ResourceKind) -> &[ListItem] {
        self.options.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn names(&self, kind: ResourceKind) -> HashMap<String, String> {
        self.options(kind)
            .iter()
            .map(|item| (item.id.clone(), item.name.clone()))
            .collect()
    }
}

pub(crate) fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

pub(crate) fn parse_param<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, GatewayError> {
    param(params, key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| GatewayError::validation(format!("Invalid value for {}: {}", key, value)))
        })
        .transpose()
}
