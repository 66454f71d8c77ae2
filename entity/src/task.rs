use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub deadline: DateTimeUtc,
    pub is_completed: bool,
    pub category_id: i32,
}

// The category link is declared without a foreign-key constraint; existence
// is only checked when a task is created.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::belongs_to(super::category::Entity)
            .from(Column::CategoryId)
            .to(super::category::Column::Id)
            .into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
