//! End-to-end behaviour of the data access layer through the public API.

use roster_core::{
    DepartmentId, EmployeeId, Money, NewDepartment, NewEmployee, NewRole, RoleId, Selection,
};
use roster_db::{ConstraintKind, Database, DbConfig};

async fn db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

/// Sales(1) / Rep 50000 (1) / Ann Lee (1, no manager).
async fn sales_with_ann(db: &Database) -> (DepartmentId, RoleId, EmployeeId) {
    let sales = db
        .departments()
        .insert(&NewDepartment::new("Sales").unwrap())
        .await
        .unwrap();
    let rep = db
        .roles()
        .insert(&NewRole::new("Rep", Money::from_dollars(50_000), sales).unwrap())
        .await
        .unwrap();
    let ann = db
        .employees()
        .insert(&NewEmployee::new("Ann", "Lee", rep, None).unwrap())
        .await
        .unwrap();
    (sales, rep, ann)
}

async fn hire(db: &Database, first: &str, role: RoleId, manager: Option<EmployeeId>) -> EmployeeId {
    db.employees()
        .insert(&NewEmployee::new(first, "Smith", role, manager).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_single_employee_organisation() {
    let db = db().await;
    let (sales, rep, ann) = sales_with_ann(&db).await;

    assert_eq!(sales, DepartmentId::new(1));
    assert_eq!(rep, RoleId::new(1));
    assert_eq!(ann, EmployeeId::new(1));

    let departments = db.departments().list().await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].id, sales);
    assert_eq!(departments[0].name, "Sales");
    assert_eq!(departments[0].budget, Some(Money::from_dollars(50_000)));

    let roles = db.roles().list().await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, rep);
    assert_eq!(roles[0].title, "Rep");
    assert_eq!(roles[0].department, "Sales");
    assert_eq!(roles[0].salary, Money::from_dollars(50_000));

    let employees = db.employees().list().await.unwrap();
    assert_eq!(employees.len(), 1);
    let row = &employees[0];
    assert_eq!(row.id, ann);
    assert_eq!(row.first_name, "Ann");
    assert_eq!(row.last_name, "Lee");
    assert_eq!(row.title, "Rep");
    assert_eq!(row.department, "Sales");
    assert_eq!(row.salary, Money::from_dollars(50_000));
    assert_eq!(row.manager, None);
}

#[tokio::test]
async fn test_department_json_shape() {
    let db = db().await;
    sales_with_ann(&db).await;
    db.departments()
        .insert(&NewDepartment::new("Eng").unwrap())
        .await
        .unwrap();

    let departments = db.departments().list().await.unwrap();
    let json = serde_json::to_value(&departments).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "name": "Sales", "budget": 5_000_000},
            {"id": 2, "name": "Eng", "budget": null},
        ])
    );
}

#[tokio::test]
async fn test_manager_on_missing_employee_is_rejected() {
    let db = db().await;
    let (_, _, ann) = sales_with_ann(&db).await;

    let err = db
        .employees()
        .update_manager(ann, Some(EmployeeId::new(999)))
        .await
        .unwrap_err();

    assert!(err.is_constraint_violation());
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

    let employees = db.employees().list().await.unwrap();
    assert_eq!(employees[0].manager, None);
}

#[tokio::test]
async fn test_missing_ids_are_silent() {
    let db = db().await;
    let (_, rep, _) = sales_with_ann(&db).await;
    let ghost = EmployeeId::new(999);

    db.employees().update_role(ghost, rep).await.unwrap();
    db.employees().update_manager(ghost, None).await.unwrap();
    db.employees().delete(Selection::Chosen(ghost)).await.unwrap();
    db.roles().delete(Selection::Chosen(RoleId::new(999))).await.unwrap();
    db.departments()
        .delete(Selection::Chosen(DepartmentId::new(999)))
        .await
        .unwrap();

    assert_eq!(db.employees().count().await.unwrap(), 1);
    assert_eq!(db.roles().count().await.unwrap(), 1);
    assert_eq!(db.departments().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_cancelled_deletes_change_nothing() {
    let db = db().await;
    sales_with_ann(&db).await;

    db.employees().delete(Selection::Cancelled).await.unwrap();
    db.roles().delete(Selection::Cancelled).await.unwrap();
    db.departments().delete(Selection::Cancelled).await.unwrap();

    assert_eq!(db.employees().count().await.unwrap(), 1);
    assert_eq!(db.roles().count().await.unwrap(), 1);
    assert_eq!(db.departments().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_referenced_rows_cannot_be_deleted() {
    let db = db().await;
    let (sales, rep, ann) = sales_with_ann(&db).await;

    let err = db
        .departments()
        .delete(Selection::Chosen(sales))
        .await
        .unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

    let err = db.roles().delete(Selection::Chosen(rep)).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

    // Bottom-up deletion succeeds
    db.employees().delete(Selection::Chosen(ann)).await.unwrap();
    db.roles().delete(Selection::Chosen(rep)).await.unwrap();
    db.departments().delete(Selection::Chosen(sales)).await.unwrap();
    assert!(db.departments().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hierarchy_views_agree() {
    let db = db().await;
    let (_, rep, ann) = sales_with_ann(&db).await;
    let bo = hire(&db, "Bo", rep, Some(ann)).await;
    let cy = hire(&db, "Cy", rep, Some(ann)).await;
    let di = hire(&db, "Di", rep, Some(bo)).await;

    let all = db.employees().list().await.unwrap();
    for row in &all {
        let has_manager = row.id != ann;
        assert_eq!(row.manager.is_some(), has_manager, "row {}", row.id);
    }

    let managers = db.employees().managers().await.unwrap();
    assert_eq!(managers.iter().map(|m| m.id).collect::<Vec<_>>(), vec![ann, bo]);

    let ann_reports = db.employees().by_manager(ann).await.unwrap();
    assert_eq!(ann_reports.iter().map(|e| e.id).collect::<Vec<_>>(), vec![bo, cy]);
    assert!(ann_reports.iter().all(|e| e.manager.as_deref() == Some("Ann Lee")));

    let bo_reports = db.employees().by_manager(bo).await.unwrap();
    assert_eq!(bo_reports.iter().map(|e| e.id).collect::<Vec<_>>(), vec![di]);
    assert!(db.employees().by_manager(di).await.unwrap().is_empty());

    // Four employees on a 50k role
    let departments = db.departments().list().await.unwrap();
    assert_eq!(departments[0].budget, Some(Money::from_dollars(200_000)));
}
