use crate::entities::{beverages, categories, dishes, prelude::*};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::info;

/// Inserts a small demo menu into an empty database.
///
/// Does nothing when any dish already exists, so it is safe to call on
/// every start.
pub async fn seed_demo_menu(db: &DatabaseConnection) -> anyhow::Result<()> {
    if Dishes::find().count(db).await? > 0 {
        info!("🌱 Menu already populated, skipping demo seed");
        return Ok(());
    }

    info!("🌱 Seeding demo menu...");
    let now = Utc::now();
    let txn = db.begin().await?;

    let mut category_ids = Vec::new();
    for name in ["Entradas", "Pratos Principais", "Sobremesas"] {
        let category = categories::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        category_ids.push(category.id);
    }

    let demo_dishes = [
        (
            "Guacamole da Casa",
            "Abacate, tomate e coentro com nachos",
            "Guacamole preparado na hora com abacates maduros, tomate, cebola roxa, coentro e limão.\nServido com nachos crocantes.",
            0,
            28.9,
        ),
        (
            "Tacos al Pastor",
            "Três tacos de porco marinado com abacaxi",
            "Tortilhas de milho recheadas com carne de porco marinada no achiote, abacaxi grelhado, cebola e coentro.",
            1,
            42.5,
        ),
        (
            "Churros",
            "Churros com doce de leite",
            "",
            2,
            19.0,
        ),
    ];

    for (order, (name, mini, full, category_idx, price)) in demo_dishes.into_iter().enumerate() {
        dishes::ActiveModel {
            name: Set(name.to_string()),
            mini_presentation: Set(Some(mini.to_string())),
            full_description: Set(Some(full.to_string())),
            image_url: Set(Some(format!("/imagem/pratos/{}.jpg", order + 1))),
            category_id: Set(category_ids.get(category_idx).copied()),
            price: Set(price),
            status: Set(ItemStatus::Active),
            display_order: Set(order as i32),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for (order, name) in ["Água com Gás", "Horchata", "Limonada Suíça"]
        .into_iter()
        .enumerate()
    {
        beverages::ActiveModel {
            name: Set(name.to_string()),
            image_url: Set(Some(format!("/imagem/bebidas/{}.jpg", order + 1))),
            status: Set(ItemStatus::Active),
            display_order: Set(order as i32),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!("✅ Demo menu seeded");

    Ok(())
}
