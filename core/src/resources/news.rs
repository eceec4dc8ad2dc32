/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::{double_option, flexible_datetime_opt};
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct News;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeNewsRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_highlighted: bool,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    pub published_at: Option<NaiveDateTime>,
    pub is_published: Option<bool>,
    pub is_highlighted: Option<bool>,
}

static FIELDS: [FieldSpec; 6] = [
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("content", "Content", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Image", FieldKind::Image),
    FieldSpec::optional("publishedAt", "Publish date", FieldKind::DateTime),
    FieldSpec::optional("isPublished", "Published", FieldKind::Checkbox),
    FieldSpec::optional("isHighlighted", "Highlighted", FieldKind::Checkbox),
];

impl Resource for News {
    type Entity = ENews;
    type Model = MNews;
    type Active = ANews;
    type Id = Uuid;
    type Create = MakeNewsRequest;
    type Patch = PatchNewsRequest;

    const KIND: ResourceKind = ResourceKind::News;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MNews) -> Uuid {
        model.id
    }

    fn label(model: &MNews) -> String {
        model.title.clone()
    }

    fn new_active(body: MakeNewsRequest) -> ANews {
        let now = Utc::now().naive_utc();

        ANews {
            id: Set(Uuid::new_v4()),
            title: Set(body.title),
            content: Set(body.content),
            image_url: Set(body.image_url),
            published_at: Set(body.published_at.unwrap_or(now)),
            is_published: Set(body.is_published),
            is_highlighted: Set(body.is_highlighted),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut ANews, patch: PatchNewsRequest) {
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(published_at) = patch.published_at {
            active.published_at = Set(published_at);
        }
        if let Some(is_published) = patch.is_published {
            active.is_published = Set(is_published);
        }
        if let Some(is_highlighted) = patch.is_highlighted {
            active.is_highlighted = Set(is_highlighted);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(published) = parse_param::<bool>(params, "published")? {
            condition = condition.add(CNews::IsPublished.eq(published));
        }

        if let Some(highlighted) = parse_param::<bool>(params, "highlighted")? {
            condition = condition.add(CNews::IsHighlighted.eq(highlighted));
        }

        Ok(condition)
    }

    fn order(select: Select<ENews>) -> Select<ENews> {
        select.order_by_desc(CNews::PublishedAt)
    }

    fn image_patch(url: String) -> Option<PatchNewsRequest> {
        Some(PatchNewsRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(_lookups: &Lookups) -> Vec<TableColumn<MNews>> {
        vec![
            TableColumn::new("Title", |n: &MNews| n.title.clone().into()),
            TableColumn::new("Published at", |n: &MNews| n.published_at.into()),
            TableColumn::new("Published", |n: &MNews| n.is_published.into()),
            TableColumn::new("Highlighted", |n: &MNews| n.is_highlighted.into()),
        ]
    }
}
