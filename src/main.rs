//! Demo run: one full order lifecycle through the restaurant system.
//!
//! Seeds a manager, a chef, a courier and a customer, then walks an order
//! from checkout through bidding to delivery and rating, and files a
//! compliment at the end. Run with `RUST_LOG=info` (or `debug` for full
//! payloads) to watch the cross-actor flow.

use bistro::lifecycle::{setup_tracing, RestaurantSystem};
use bistro::model::{
    AccountCreate, ComplaintCreate, ComplaintKind, DishCategory, DishCreate, DisputeResolution,
    FlavorTag, OrderCreate, OrderItemRequest, OrderStatus, Role, TargetType,
};
use tracing::{info, Instrument};

fn account(name: &str, role: Role) -> AccountCreate {
    AccountCreate {
        name: name.to_string(),
        email: format!("{}@bistro.example", name.to_lowercase()),
        role,
        balance: 0.0,
        salary: if role.is_employee() { 2000.0 } else { 0.0 },
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting restaurant system");
    let system = RestaurantSystem::new();
    let err = |e: &dyn std::fmt::Display| e.to_string();

    // Seed the staff and a customer. Non-manager registrations start
    // unapproved until the manager signs off.
    let (manager, chef, courier, customer) = async {
        let manager = system
            .accounts
            .register(account("Mona", Role::Manager))
            .await
            .map_err(|e| err(&e))?;
        let chef = system
            .accounts
            .register(account("Carlo", Role::Chef))
            .await
            .map_err(|e| err(&e))?;
        let courier = system
            .accounts
            .register(account("Dara", Role::Delivery))
            .await
            .map_err(|e| err(&e))?;
        let customer = system
            .accounts
            .register(account("Alice", Role::Customer))
            .await
            .map_err(|e| err(&e))?;
        for id in [&chef, &courier, &customer] {
            system.accounts.approve(id).await.map_err(|e| err(&e))?;
        }
        system
            .accounts
            .deposit(&customer, 150.0)
            .await
            .map_err(|e| err(&e))?;
        Ok::<_, String>((manager, chef, courier, customer))
    }
    .instrument(tracing::info_span!("seeding"))
    .await?;

    let dish = system
        .dishes
        .add(DishCreate {
            name: "Tamarind Noodles".into(),
            description: "Wok-fried noodles with tamarind glaze".into(),
            price: 14.0,
            chef_id: chef.clone(),
            category: DishCategory::Main,
            vip_only: false,
            flavor_tags: vec![FlavorTag::Tangy, FlavorTag::Savory],
        })
        .await
        .map_err(|e| err(&e))?;

    // Checkout debits the customer and snapshots the dish price.
    let order = async {
        system
            .orders
            .place(OrderCreate {
                customer_id: customer.clone(),
                items: vec![OrderItemRequest {
                    dish_id: dish.clone(),
                    quantity: 2,
                }],
                delivery_address: "44 Vine Street".into(),
            })
            .await
            .map_err(|e| err(&e))
    }
    .instrument(tracing::info_span!("checkout"))
    .await?;
    info!(order = %order.id, total = order.total, "Order placed");

    // Kitchen flow, then the bidding window opens at `ready`.
    system
        .orders
        .update_status(&order.id, &chef, OrderStatus::Preparing)
        .await
        .map_err(|e| err(&e))?;
    system
        .orders
        .update_status(&order.id, &chef, OrderStatus::Ready)
        .await
        .map_err(|e| err(&e))?;

    let delivered = async {
        let bid = system
            .orders
            .submit_bid(&order.id, &courier, 6.5)
            .await
            .map_err(|e| err(&e))?;
        system
            .orders
            .accept_bid(&order.id, &bid.id, &manager, None)
            .await
            .map_err(|e| err(&e))?;
        system
            .orders
            .mark_delivered(&order.id, &courier)
            .await
            .map_err(|e| err(&e))
    }
    .instrument(tracing::info_span!("delivery"))
    .await?;
    info!(order = %delivered.id, fee = delivered.delivery_fee, "Order delivered");

    // One rating per order: dish always, courier optionally.
    system
        .orders
        .submit_rating(&order.id, &customer, &dish, 5, Some(4), "Perfect balance")
        .await
        .map_err(|e| err(&e))?;

    let picks = system
        .recommender
        .recommend(&customer, 3)
        .await
        .map_err(|e| err(&e))?;
    for pick in &picks {
        info!(dish = %pick.dish.name, score = pick.score, "Recommended");
    }

    // A compliment for the chef, confirmed by the manager.
    let compliment = system
        .complaints
        .file(ComplaintCreate {
            complainant_id: customer.clone(),
            target_id: chef.clone(),
            target_type: TargetType::Chef,
            kind: ComplaintKind::Compliment,
            description: "Best noodles in town".into(),
        })
        .await
        .map_err(|e| err(&e))?;
    system
        .complaints
        .resolve(&compliment.id, &manager, DisputeResolution::Upheld)
        .await
        .map_err(|e| err(&e))?;

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
