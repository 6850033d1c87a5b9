//! Reputation engine tests: complaints, compliments, warnings, demotions.

use bistro::complaint_actor::ComplaintError;
use bistro::config::RestaurantPolicy;
use bistro::lifecycle::RestaurantSystem;
use bistro::model::{
    AccountCreate, ComplaintCreate, ComplaintKind, ComplaintStatus, DishCategory, DishCreate,
    DisputeResolution, OrderCreate, OrderItemRequest, Role, TargetType,
};
use bistro::order_actor::OrderError;

fn account(name: &str, role: Role) -> AccountCreate {
    AccountCreate {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        role,
        balance: 0.0,
        salary: if role.is_employee() { 2000.0 } else { 0.0 },
    }
}

fn filing(filer: &str, target: &str, target_type: TargetType, kind: ComplaintKind) -> ComplaintCreate {
    ComplaintCreate {
        complainant_id: filer.to_string(),
        target_id: target.to_string(),
        target_type,
        kind,
        description: "as discussed".to_string(),
    }
}

/// Manager, chef, and two approved customers.
async fn seed(system: &RestaurantSystem) -> (String, String, String, String) {
    let manager = system
        .accounts
        .register(account("mona", Role::Manager))
        .await
        .unwrap();
    let chef = system
        .accounts
        .register(account("carlo", Role::Chef))
        .await
        .unwrap();
    let cust_a = system
        .accounts
        .register(account("alice", Role::Customer))
        .await
        .unwrap();
    let cust_b = system
        .accounts
        .register(account("bob", Role::Customer))
        .await
        .unwrap();
    for id in [&chef, &cust_a, &cust_b] {
        system.accounts.approve(id).await.unwrap();
    }
    (manager, chef, cust_a, cust_b)
}

#[tokio::test]
async fn compliment_cancels_outstanding_complaints() {
    let system = RestaurantSystem::new();
    let (_, chef, cust_a, cust_b) = seed(&system).await;

    for filer in [&cust_a, &cust_b] {
        system
            .complaints
            .file(filing(filer, &chef, TargetType::Chef, ComplaintKind::Complaint))
            .await
            .expect("Failed to file complaint");
    }
    assert_eq!(
        system.accounts.fetch(&chef).await.unwrap().complaints_count,
        2
    );

    system
        .complaints
        .file(filing(
            &cust_a,
            &chef,
            TargetType::Chef,
            ComplaintKind::Compliment,
        ))
        .await
        .expect("Failed to file compliment");

    let carlo = system.accounts.fetch(&chef).await.unwrap();
    assert_eq!(carlo.complaints_count, 1);
    assert_eq!(carlo.compliments, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn complaints_demote_then_terminate_employee() {
    let system = RestaurantSystem::new();
    let (_, chef, cust_a, cust_b) = seed(&system).await;

    // Third complaint reaches the demotion threshold.
    for filer in [&cust_a, &cust_b, &cust_a] {
        system
            .complaints
            .file(filing(filer, &chef, TargetType::Chef, ComplaintKind::Complaint))
            .await
            .unwrap();
    }
    let carlo = system.accounts.fetch(&chef).await.unwrap();
    assert_eq!(carlo.demotions, 1);
    assert!((carlo.salary - 1800.0).abs() < 1e-9);
    assert_eq!(carlo.role, Role::Chef);

    // A fourth keeps the count above the threshold: second demotion fires
    // the chef.
    system
        .complaints
        .file(filing(
            &cust_b,
            &chef,
            TargetType::Chef,
            ComplaintKind::Complaint,
        ))
        .await
        .unwrap();
    let carlo = system.accounts.fetch(&chef).await.unwrap();
    assert_eq!(carlo.demotions, 2);
    assert_eq!(carlo.role, Role::Customer);
    assert!(!carlo.approved);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn dismissed_complaint_unwinds_and_penalizes_filer() {
    let system = RestaurantSystem::new();
    let (manager, chef, cust_a, _) = seed(&system).await;

    let complaint = system
        .complaints
        .file(filing(
            &cust_a,
            &chef,
            TargetType::Chef,
            ComplaintKind::Complaint,
        ))
        .await
        .unwrap();
    assert_eq!(
        system.accounts.fetch(&chef).await.unwrap().complaints_count,
        1
    );

    // The chef contests; only the target can, and only once.
    let err = system
        .complaints
        .dispute(&complaint.id, &cust_a)
        .await
        .expect_err("non-target dispute should fail");
    assert!(matches!(err, ComplaintError::Forbidden(_)));
    let disputed = system.complaints.dispute(&complaint.id, &chef).await.unwrap();
    assert_eq!(disputed.status, ComplaintStatus::Disputed);

    let resolved = system
        .complaints
        .resolve(&complaint.id, &manager, DisputeResolution::Dismissed)
        .await
        .expect("Failed to resolve");
    assert_eq!(resolved.status, ComplaintStatus::Resolved);
    assert_eq!(resolved.dispute_resolution, Some(DisputeResolution::Dismissed));

    // Counters unwound, filer warned.
    assert_eq!(
        system.accounts.fetch(&chef).await.unwrap().complaints_count,
        0
    );
    assert_eq!(system.accounts.fetch(&cust_a).await.unwrap().warnings, 1);

    // Resolution is terminal.
    let err = system
        .complaints
        .resolve(&complaint.id, &manager, DisputeResolution::Upheld)
        .await
        .expect_err("second resolution should fail");
    assert!(matches!(err, ComplaintError::InvalidState(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn upheld_complaint_warns_customer_target() {
    let system = RestaurantSystem::new();
    let (manager, _, cust_a, cust_b) = seed(&system).await;

    let complaint = system
        .complaints
        .file(filing(
            &cust_a,
            &cust_b,
            TargetType::Customer,
            ComplaintKind::Complaint,
        ))
        .await
        .unwrap();
    system
        .complaints
        .resolve(&complaint.id, &manager, DisputeResolution::Upheld)
        .await
        .unwrap();

    assert_eq!(system.accounts.fetch(&cust_b).await.unwrap().warnings, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn vip_filings_carry_double_weight() {
    // Promote cheaply: one $20 order crosses a $10 threshold.
    let policy = RestaurantPolicy {
        vip_spending_threshold: 10.0,
        ..RestaurantPolicy::default()
    };
    let system = RestaurantSystem::with_policy(policy);
    let (_, chef, cust_a, _) = seed(&system).await;

    system.accounts.deposit(&cust_a, 50.0).await.unwrap();
    let dish = system
        .dishes
        .add(DishCreate {
            name: "Flan".into(),
            description: String::new(),
            price: 20.0,
            chef_id: chef.clone(),
            category: DishCategory::Desserts,
            vip_only: false,
            flavor_tags: vec![],
        })
        .await
        .unwrap();
    system
        .orders
        .place(OrderCreate {
            customer_id: cust_a.clone(),
            items: vec![OrderItemRequest {
                dish_id: dish,
                quantity: 1,
            }],
            delivery_address: "1 Test Lane".into(),
        })
        .await
        .unwrap();
    assert_eq!(system.accounts.fetch(&cust_a).await.unwrap().role, Role::Vip);

    let complaint = system
        .complaints
        .file(filing(
            &cust_a,
            &chef,
            TargetType::Chef,
            ComplaintKind::Complaint,
        ))
        .await
        .unwrap();
    assert_eq!(complaint.weight, 2);
    assert_eq!(
        system.accounts.fetch(&chef).await.unwrap().complaints_count,
        2
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn warnings_deregister_customers_and_downgrade_vips() {
    let system = RestaurantSystem::new();
    let (manager, chef, cust_a, _) = seed(&system).await;

    // Three dismissed complaints, three warnings: deregistration.
    for _ in 0..3 {
        let complaint = system
            .complaints
            .file(filing(
                &cust_a,
                &chef,
                TargetType::Chef,
                ComplaintKind::Complaint,
            ))
            .await
            .unwrap();
        system
            .complaints
            .resolve(&complaint.id, &manager, DisputeResolution::Dismissed)
            .await
            .unwrap();
    }
    let alice = system.accounts.fetch(&cust_a).await.unwrap();
    assert_eq!(alice.role, Role::Visitor);
    assert!(alice.blacklisted);
    assert!(!alice.approved);

    // Deregistered accounts cannot order.
    let dish = system
        .dishes
        .add(DishCreate {
            name: "Flan".into(),
            description: String::new(),
            price: 5.0,
            chef_id: chef.clone(),
            category: DishCategory::Desserts,
            vip_only: false,
            flavor_tags: vec![],
        })
        .await
        .unwrap();
    let err = system
        .orders
        .place(OrderCreate {
            customer_id: cust_a.clone(),
            items: vec![OrderItemRequest {
                dish_id: dish,
                quantity: 1,
            }],
            delivery_address: "1 Test Lane".into(),
        })
        .await
        .expect_err("deregistered customer should not order");
    assert!(matches!(err, OrderError::Forbidden(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn vip_downgrade_resets_warnings() {
    let policy = RestaurantPolicy {
        vip_spending_threshold: 10.0,
        ..RestaurantPolicy::default()
    };
    let system = RestaurantSystem::with_policy(policy);
    let (manager, chef, cust_a, _) = seed(&system).await;

    // Promote via one order.
    system.accounts.deposit(&cust_a, 50.0).await.unwrap();
    let dish = system
        .dishes
        .add(DishCreate {
            name: "Flan".into(),
            description: String::new(),
            price: 20.0,
            chef_id: chef.clone(),
            category: DishCategory::Desserts,
            vip_only: false,
            flavor_tags: vec![],
        })
        .await
        .unwrap();
    system
        .orders
        .place(OrderCreate {
            customer_id: cust_a.clone(),
            items: vec![OrderItemRequest {
                dish_id: dish,
                quantity: 1,
            }],
            delivery_address: "1 Test Lane".into(),
        })
        .await
        .unwrap();

    // Two dismissed filings, two warnings: the VIP threshold.
    for _ in 0..2 {
        let complaint = system
            .complaints
            .file(filing(
                &cust_a,
                &chef,
                TargetType::Chef,
                ComplaintKind::Complaint,
            ))
            .await
            .unwrap();
        system
            .complaints
            .resolve(&complaint.id, &manager, DisputeResolution::Dismissed)
            .await
            .unwrap();
    }

    let alice = system.accounts.fetch(&cust_a).await.unwrap();
    assert_eq!(alice.role, Role::Customer);
    assert_eq!(alice.warnings, 0);
    assert!(alice.vip_since.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn couriers_only_file_against_customers() {
    let system = RestaurantSystem::new();
    let (_, chef, cust_a, _) = seed(&system).await;
    let courier = system
        .accounts
        .register(account("dara", Role::Delivery))
        .await
        .unwrap();
    system.accounts.approve(&courier).await.unwrap();

    let err = system
        .complaints
        .file(filing(
            &courier,
            &chef,
            TargetType::Chef,
            ComplaintKind::Complaint,
        ))
        .await
        .expect_err("courier-vs-chef filing should fail");
    assert!(matches!(err, ComplaintError::Forbidden(_)));

    system
        .complaints
        .file(filing(
            &courier,
            &cust_a,
            TargetType::Customer,
            ComplaintKind::Complaint,
        ))
        .await
        .expect("courier-vs-customer filing should succeed");

    system.shutdown().await.unwrap();
}
