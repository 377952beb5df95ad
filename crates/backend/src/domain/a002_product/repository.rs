use chrono::Utc;
use contracts::domain::a001_category::CategoryRef;
use contracts::domain::a002_product::{Product, ProductDraft, ProductPatch};
use contracts::domain::common::EntityStatus;

use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

use crate::domain::a001_category::repository as category_repository;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub quantity: i32,
    pub category_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::a001_category::repository::Entity",
        from = "Column::CategoryId",
        to = "crate::domain::a001_category::repository::Column::Id"
    )]
    Category,
}

impl Related<category_repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            description: m.description,
            // В таблицу пишутся только Active/Inactive
            status: EntityStatus::parse(&m.status).unwrap_or(EntityStatus::Inactive),
            quantity: m.quantity,
            category_id: m.category_id,
            category: None,
            created_at: m.created_at,
        }
    }
}

fn with_category(product: Model, category: Option<category_repository::Model>) -> Product {
    let mut product: Product = product.into();
    product.category = category.map(CategoryRef::from);
    product
}

/// Список товаров по возрастанию id; `embed_category` подтягивает категорию join-ом
pub async fn list_all<C: ConnectionTrait>(
    db: &C,
    embed_category: bool,
) -> Result<Vec<Product>, DbErr> {
    let query = Entity::find().order_by_asc(Column::Id);
    if embed_category {
        Ok(query
            .find_also_related(category_repository::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|(p, c)| with_category(p, c))
            .collect())
    } else {
        Ok(query.all(db).await?.into_iter().map(Into::into).collect())
    }
}

pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    id: i64,
    embed_category: bool,
) -> Result<Option<Product>, DbErr> {
    if embed_category {
        let result = Entity::find_by_id(id)
            .find_also_related(category_repository::Entity)
            .one(db)
            .await?;
        Ok(result.map(|(p, c)| with_category(p, c)))
    } else {
        Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
    }
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn count_by_category<C: ConnectionTrait>(db: &C, category_id: i64) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .count(db)
        .await
}

pub async fn insert<C: ConnectionTrait>(db: &C, draft: &ProductDraft) -> Result<Product, DbErr> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(draft.name.clone()),
        description: Set(draft.description.clone()),
        status: Set(draft.status.as_str().to_string()),
        quantity: Set(draft.quantity),
        category_id: Set(draft.category_id),
        created_at: Set(Utc::now()),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    patch: &ProductPatch,
) -> Result<Option<Product>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    if patch.name.is_none()
        && patch.description.is_none()
        && patch.status.is_none()
        && patch.quantity.is_none()
        && patch.category_id.is_none()
    {
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
        active.status = Set(status.as_str().to_string());
    }
    if let Some(quantity) = patch.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(category_id) = patch.category_id {
        active.category_id = Set(category_id);
    }
    let updated = active.update(db).await?;
    Ok(Some(updated.into()))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Product>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    Entity::delete_by_id(id).exec(db).await?;
    Ok(Some(model.into()))
}
