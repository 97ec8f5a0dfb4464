// ==========================================
// StatusClassifier 集成测试
// ==========================================
// 测试目标: 验证映射表、回退策略、徽标片段、纯函数性质
// ==========================================

use restaurant_status::domain::types::{OrderItemStatus, OrderStatus, StatusDomain, TableStatus};
use restaurant_status::engine::StatusClassifier;

const TABLE_CLASSES: [&str; 6] = [
    "btn-success",
    "btn-warning",
    "btn-info",
    "btn-secondary",
    "btn-primary",
    "btn-danger",
];
const ORDER_CLASSES: [&str; 8] = [
    "pending",
    "sent-to-kitchen",
    "preparing",
    "ready",
    "served",
    "ready-to-pay",
    "completed",
    "cancelled",
];
const ITEM_CLASSES: [&str; 5] = ["pending", "preparing", "ready", "served", "cancelled"];

fn all_codes(domain: StatusDomain) -> Vec<&'static str> {
    match domain {
        StatusDomain::Table => TableStatus::ALL.iter().map(|s| s.code()).collect(),
        StatusDomain::Order => OrderStatus::ALL.iter().map(|s| s.code()).collect(),
        StatusDomain::Item => OrderItemStatus::ALL.iter().map(|s| s.code()).collect(),
    }
}

fn allowed_classes(domain: StatusDomain) -> &'static [&'static str] {
    match domain {
        StatusDomain::Table => &TABLE_CLASSES,
        StatusDomain::Order => &ORDER_CLASSES,
        StatusDomain::Item => &ITEM_CLASSES,
    }
}

#[test]
fn test_known_codes_map_into_domain_class_set() {
    let classifier = StatusClassifier::default();
    for domain in StatusDomain::ALL {
        for code in all_codes(domain) {
            let class = classifier.css_class_for(domain, code);
            assert!(!class.is_empty(), "{}/{} has empty class", domain, code);
            assert!(
                allowed_classes(domain).contains(&class),
                "{}/{} mapped to unexpected class {}",
                domain,
                code,
                class
            );
            assert!(!classifier.label_for(domain, code).is_empty());
        }
    }
}

#[test]
fn test_table_mapping() {
    let c = StatusClassifier::default();
    let expected = [
        ("Disponible", "btn-success", "Disponible"),
        ("Ocupada", "btn-warning", "Ocupada"),
        ("Reservada", "btn-info", "Reservada"),
        ("EnEspera", "btn-secondary", "En Espera"),
        ("Atendida", "btn-primary", "Atendida"),
        ("EnPreparacion", "btn-warning", "En Preparación"),
        ("Servida", "btn-info", "Servida"),
        ("ParaPago", "btn-success", "Para Pago"),
        ("Pagada", "btn-success", "Pagada"),
        ("Bloqueada", "btn-danger", "Bloqueada"),
    ];
    for (code, class, label) in expected {
        assert_eq!(c.css_class_for(StatusDomain::Table, code), class, "class of {}", code);
        assert_eq!(c.label_for(StatusDomain::Table, code), label, "label of {}", code);
        assert!(!c.description_for(StatusDomain::Table, code).is_empty());
    }
}

#[test]
fn test_order_mapping() {
    let c = StatusClassifier::default();
    assert_eq!(c.label_for(StatusDomain::Order, "SentToKitchen"), "Enviado a Cocina");
    assert_eq!(c.css_class_for(StatusDomain::Order, "SentToKitchen"), "sent-to-kitchen");
    assert_eq!(c.css_class_for(StatusDomain::Order, "ReadyToPay"), "ready-to-pay");
    assert_eq!(c.css_class_for(StatusDomain::Order, "Completed"), "completed");
    assert_eq!(c.label_for(StatusDomain::Order, "ReadyToPay"), "Listo para Pagar");
    for code in all_codes(StatusDomain::Order) {
        assert_eq!(c.description_for(StatusDomain::Order, code), "");
    }
}

#[test]
fn test_reference_mappings() {
    let c = StatusClassifier::default();
    assert_eq!(c.css_class_for(StatusDomain::Item, "Ready"), "ready");
    assert_eq!(c.label_for(StatusDomain::Order, "SentToKitchen"), "Enviado a Cocina");
    assert_eq!(c.css_class_for(StatusDomain::Table, "Bloqueada"), "btn-danger");
    assert_eq!(c.label_for(StatusDomain::Item, "Xyz"), "Xyz");
}

#[test]
fn test_unknown_codes_resolve_to_defaults() {
    let c = StatusClassifier::default();
    for code in ["Xyz", "", "  ", "pending", "DISPONIBLE", "<b>"] {
        for domain in StatusDomain::ALL {
            let display = c.display_for(domain, code);
            assert!(!display.recognized);
            assert_eq!(display.label, code);
            assert_eq!(c.label_for(domain, code), code);
            assert_eq!(c.description_for(domain, code), "");
        }
        assert_eq!(c.css_class_for(StatusDomain::Table, code), "btn-secondary");
        assert_eq!(c.css_class_for(StatusDomain::Order, code), "pending");
        assert_eq!(c.css_class_for(StatusDomain::Item, code), "pending");
    }
}

#[test]
fn test_codes_are_trimmed_before_lookup() {
    let c = StatusClassifier::default();
    let display = c.display_for(StatusDomain::Item, " Ready ");
    assert!(display.recognized);
    assert_eq!(display.code, "Ready");
    assert_eq!(display.css_class, "ready");
}

#[test]
fn test_cross_domain_codes_are_not_shared() {
    let c = StatusClassifier::default();
    // SentToKitchen 只属于订单域
    assert!(!c.display_for(StatusDomain::Item, "SentToKitchen").recognized);
    assert!(c.display_for(StatusDomain::Order, "SentToKitchen").recognized);
    // 桌台状态码在菜品域回退
    assert_eq!(c.css_class_for(StatusDomain::Item, "Ocupada"), "pending");
}

#[test]
fn test_badge_description_inclusion() {
    for locale in ["es", "en"] {
        let c = StatusClassifier::default().for_locale(locale);
        for domain in StatusDomain::ALL {
            for code in all_codes(domain) {
                let description = c.description_for(domain, code);
                let without = c.badge_markup(domain, code, false);
                let with = c.badge_markup(domain, code, true);

                assert!(without.contains(&c.label_for(domain, code)));
                if description.is_empty() {
                    assert_eq!(with, without);
                } else {
                    assert!(
                        !without.contains(&description),
                        "{}/{} leaks description",
                        domain,
                        code
                    );
                    assert!(with.contains(&description), "{}/{} misses description", domain, code);
                }
            }
        }
    }
}

#[test]
fn test_classifier_is_idempotent() {
    let c = StatusClassifier::default();
    for domain in StatusDomain::ALL {
        for code in all_codes(domain).into_iter().chain(["Unknown"]) {
            assert_eq!(c.display_for(domain, code), c.display_for(domain, code));
            assert_eq!(c.badge_markup(domain, code, true), c.badge_markup(domain, code, true));
            assert_eq!(c.row_class_for(domain, code), c.row_class_for(domain, code));
        }
    }
}

#[test]
fn test_item_row_classes_mirror_css_classes() {
    let c = StatusClassifier::default();
    for code in all_codes(StatusDomain::Item) {
        assert_eq!(
            c.row_class_for(StatusDomain::Item, code),
            format!("status-{}", c.css_class_for(StatusDomain::Item, code))
        );
    }
}

#[test]
fn test_english_labels() {
    let c = StatusClassifier::default().for_locale("en");
    assert_eq!(c.label_for(StatusDomain::Table, "Bloqueada"), "Blocked");
    assert_eq!(
        c.description_for(StatusDomain::Table, "Bloqueada"),
        "Table blocked for maintenance"
    );
    assert_eq!(c.label_for(StatusDomain::Item, "Cancelled"), "Cancelled");
    // 样式类与语言无关
    assert_eq!(c.css_class_for(StatusDomain::Table, "Bloqueada"), "btn-danger");
}
