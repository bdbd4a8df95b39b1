//! Golden snapshot tests for metamodel rendering
//!
//! These tests load declaration models from `tests/fixtures/` and compare the generated metamodel sources
//! against inline snapshots. This ensures rendering changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use metagen::{DeclarationModel, GenerationOutput, GeneratorConfig, generate_model};
use std::fs;

/// Load a declaration model from the fixtures directory
fn load_fixture(name: &str) -> DeclarationModel {
    let path = format!("tests/fixtures/{}.json", name);
    let source = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path));
    DeclarationModel::from_json(&source).expect("fixture model is valid")
}

fn source_for<'a>(output: &'a GenerationOutput, entity: &str) -> &'a str {
    output
        .files
        .iter()
        .find(|f| f.entity == entity)
        .map(|f| f.source.as_str())
        .unwrap_or_else(|| panic!("no file generated for {}", entity))
}

#[test]
fn test_field_access_entity_codegen() {
    let output = generate_model(&load_fixture("shop"), &GeneratorConfig::default());
    insta::assert_snapshot!(source_for(&output, "com.acme.shop.Order"), @r#"
package com.acme.shop.metamodel;

import com.acme.shop.Customer;
import com.acme.shop.LineItem;
import com.acme.shop.Order;
import java.util.ArrayList;
import javax.annotation.Generated;
import javax.persistence.metamodel.ListAttribute;
import javax.persistence.metamodel.MapAttribute;
import javax.persistence.metamodel.SetAttribute;
import javax.persistence.metamodel.SingularAttribute;
import javax.persistence.metamodel.StaticMetamodel;

@Generated("metagen")
@StaticMetamodel(Order.class)
public abstract class Order_ {
    public static volatile SingularAttribute<Order, Long> id;
    public static volatile SingularAttribute<Order, String> number;
    public static volatile SingularAttribute<Order, Double> total;
    public static volatile SingularAttribute<Order, Customer> customer;
    public static volatile ListAttribute<Order, LineItem> lines;
    public static volatile SetAttribute<Order, String> tags;
    public static volatile MapAttribute<Order, String, String> attributes;
    public static volatile SingularAttribute<Order, ArrayList> notes;
}
"#);
}

#[test]
fn test_accessor_entity_codegen() {
    let config = GeneratorConfig::default().with_generated_marker(false);
    let output = generate_model(&load_fixture("shop"), &config);
    insta::assert_snapshot!(source_for(&output, "com.acme.shop.Customer"), @r#"
package com.acme.shop.metamodel;

import com.acme.shop.Customer;
import com.acme.shop.Order;
import javax.persistence.metamodel.MapAttribute;
import javax.persistence.metamodel.SingularAttribute;
import javax.persistence.metamodel.StaticMetamodel;

@StaticMetamodel(Customer.class)
public abstract class Customer_ {
    public static volatile SingularAttribute<Customer, Long> id;
    public static volatile SingularAttribute<Customer, String> name;
    public static volatile SingularAttribute<Customer, Boolean> active;
    public static volatile MapAttribute<Customer, Long, Order> ordersByKey;
}
"#);
}

#[test]
fn test_embeddable_codegen_with_custom_indent() {
    let config = GeneratorConfig::default()
        .with_generated_marker(false)
        .with_indent_width(2);
    let output = generate_model(&load_fixture("shop"), &config);
    insta::assert_snapshot!(source_for(&output, "com.acme.shop.LineItem"), @r#"
package com.acme.shop.metamodel;

import com.acme.shop.LineItem;
import javax.persistence.metamodel.SingularAttribute;
import javax.persistence.metamodel.StaticMetamodel;

@StaticMetamodel(LineItem.class)
public abstract class LineItem_ {
  public static volatile SingularAttribute<LineItem, String> product;
  public static volatile SingularAttribute<LineItem, Integer> quantity;
}
"#);
}

#[test]
fn test_empty_entity_codegen() {
    let model = DeclarationModel::from_json(
        r#"{ "types": [ { "qualified_name": "com.acme.Audit", "annotations": ["javax.persistence.Entity"] } ] }"#,
    )
    .unwrap();
    let output = generate_model(&model, &GeneratorConfig::default().with_generated_marker(false));
    insta::assert_snapshot!(source_for(&output, "com.acme.Audit"), @r#"
package com.acme.metamodel;

import com.acme.Audit;
import javax.persistence.metamodel.StaticMetamodel;

@StaticMetamodel(Audit.class)
public abstract class Audit_ {
}
"#);
}
