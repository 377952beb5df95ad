use chrono::Utc;
use contracts::domain::a001_category::{Category, CategoryDraft, CategoryPatch, CategoryRef};
use contracts::domain::common::EntityStatus;

use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
            description: m.description,
            status: m.status.as_deref().and_then(EntityStatus::parse),
            created_at: m.created_at,
        }
    }
}

impl From<Model> for CategoryRef {
    fn from(m: Model) -> Self {
        CategoryRef {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Category>, DbErr> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Category>, DbErr> {
    let result = Entity::find_by_id(id).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn insert<C: ConnectionTrait>(db: &C, draft: &CategoryDraft) -> Result<Category, DbErr> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(draft.name.clone()),
        description: Set(draft.description.clone()),
        status: Set(draft.status.map(|s| s.as_str().to_string())),
        created_at: Set(Utc::now()),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

/// Частичное обновление. `None`, если записи с таким id нет
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    patch: &CategoryPatch,
) -> Result<Option<Category>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    if patch.name.is_none() && patch.description.is_none() && patch.status.is_none() {
        return Ok(Some(model.into()));
    }

    let mut active: ActiveModel = model.into();
    if let Some(name) = &patch.name {
        active.name = Set(name.clone());
    }
    if let Some(description) = &patch.description {
        active.description = Set(description.clone());
    }
    if let Some(status) = patch.status {
        active.status = Set(status.map(|s| s.as_str().to_string()));
    }
    let updated = active.update(db).await?;
    Ok(Some(updated.into()))
}

/// Удаление. Возвращает удалённую запись
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Category>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    Entity::delete_by_id(id).exec(db).await?;
    Ok(Some(model.into()))
}
