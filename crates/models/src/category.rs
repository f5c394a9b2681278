use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, product};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::has_many(product::Entity).into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All categories in id order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}
