use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    category_id: i64,
    name: &str,
    price: Decimal,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        category_id: Set(category_id),
    };
    Ok(am.insert(db).await?)
}

/// All products in id order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Products owned by `category_id`, in id order. Empty when the category is unknown.
pub async fn list_by_category(db: &DatabaseConnection, category_id: i64) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}
