mod common;

use common::{foo_and_bar, values};
use ormlite::error::OrmLiteError;
use ormlite::prelude::*;
use ormlite::stmt::clause::{Exists, ManyClause, ManyOp, Not};
use ormlite::stmt::{ArgumentHolder, Clause, InternalQueryBuilderWrapper, StatementKind};

#[derive(Debug)]
struct BarSubQuery;

impl InternalQueryBuilderWrapper for BarSubQuery {
    fn append_statement_string(
        &self,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> ormlite::Result<()> {
        sb.push_str("SELECT id FROM bar WHERE x = ?");
        args.push(ArgumentHolder::raw(5));
        Ok(())
    }

    fn result_column_count(&self) -> usize {
        1
    }
}

fn render(clause: &dyn Clause, dialect: Dialect) -> (String, Vec<SqlValue>) {
    let mut sb = String::new();
    let mut args = Vec::new();
    clause.append_sql(dialect, None, &mut sb, &mut args).unwrap();
    let values = args.iter().map(|a| a.sql_value().unwrap()).collect();
    (sb, values)
}

#[test]
fn exists_renders_sub_query_and_its_arguments() {
    let (sql, args) = render(&Exists::new(Box::new(BarSubQuery)), Dialect::SQLite);
    assert_eq!(sql, "EXISTS (SELECT id FROM bar WHERE x = ?) ");
    assert_eq!(args, vec![SqlValue::Int(5)]);
}

#[test]
fn nested_exists_keeps_outer_then_inner_argument_order() {
    let dialect = Dialect::SQLite;
    let (foo, bar) = foo_and_bar(dialect);

    let mut sub = QueryBuilder::new(dialect, bar);
    sub.select_columns(["id"]);
    sub.where_().eq("b", 2).and().eq("x", ColumnArg::qualified("foo", "a"));

    let mut qb = QueryBuilder::new(dialect, foo);
    qb.where_()
        .eq("a", 1)
        .and()
        .exists(sub)
        .and()
        .eq("c", 3);
    let query = qb.prepare().unwrap();

    assert_eq!(
        query.sql(),
        r#"SELECT * FROM "foo" WHERE "a" = ? AND EXISTS (SELECT "id" FROM "bar" WHERE "b" = ? AND "x" = "foo"."a") AND "c" = ?"#
    );
    assert_eq!(
        values(&query),
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
    );
}

#[test]
fn numbered_placeholders_follow_argument_positions() {
    let dialect = Dialect::PostgreSQL;
    let (foo, bar) = foo_and_bar(dialect);

    let mut sub = QueryBuilder::new(dialect, bar);
    sub.select_columns(["id"]);
    sub.where_().between("b", 10, 20);

    let mut qb = QueryBuilder::new(dialect, foo);
    qb.where_()
        .in_("a", [1, 2])
        .and()
        .not_exists(sub)
        .or()
        .ge("c", 9);
    let query = qb.prepare().unwrap();

    assert_eq!(
        query.sql(),
        r#"SELECT * FROM "foo" WHERE ("a" IN ($1,$2) AND NOT EXISTS (SELECT "id" FROM "bar" WHERE "b" BETWEEN $3 AND $4)) OR "c" >= $5"#
    );
    assert_eq!(
        values(&query),
        (1..=2)
            .chain([10, 20, 9])
            .map(SqlValue::Int)
            .collect::<Vec<_>>()
    );
}

#[test]
fn raw_sql_joins_the_numbered_sequence() {
    let dialect = Dialect::PostgreSQL;
    let (foo, _) = foo_and_bar(dialect);

    let mut qb = QueryBuilder::new(dialect, foo);
    qb.where_()
        .eq("a", 1)
        .and()
        .raw(r#""c" % ? = ?"#, [ArgumentHolder::raw(2), ArgumentHolder::raw(0)])
        .and()
        .lt("id", 50);
    let query = qb.prepare().unwrap();

    assert_eq!(
        query.sql(),
        r#"SELECT * FROM "foo" WHERE "a" = $1 AND "c" % $2 = $3 AND "id" < $4"#
    );
    assert_eq!(
        query.inline_sql().unwrap(),
        r#"SELECT * FROM "foo" WHERE "a" = 1 AND "c" % 2 = 0 AND "id" < 50"#
    );
}

#[test]
fn rendering_twice_is_identical() {
    let a = || -> Box<dyn Clause> {
        Box::new(ormlite::stmt::clause::Raw::new(
            r#""a" = ?"#,
            vec![ArgumentHolder::raw(1)],
        ))
    };
    let exists: Box<dyn Clause> = Box::new(Exists::new(Box::new(BarSubQuery)));
    let both = ManyClause::new(ManyOp::And, vec![a(), exists]).unwrap();
    let tree = ManyClause::new(ManyOp::Or, vec![Box::new(both), Box::new(Not::new(a()))]).unwrap();

    let first = render(&tree, Dialect::H2);
    let second = render(&tree, Dialect::H2);
    assert_eq!(first, second);
    assert_eq!(
        first.0,
        r#"("a" = ? AND EXISTS (SELECT id FROM bar WHERE x = ?)) OR (NOT "a" = ?) "#
    );
}

#[test]
fn builder_errors_surface_at_prepare() {
    let dialect = Dialect::SQLite;
    let (foo, _) = foo_and_bar(dialect);

    let mut qb = QueryBuilder::new(dialect, foo.clone());
    qb.where_().eq("a", 1).and();
    assert!(matches!(qb.prepare(), Err(OrmLiteError::Statement(_))));

    let mut qb = QueryBuilder::new(dialect, foo.clone());
    qb.where_().eq("unknown", 1);
    assert!(matches!(qb.prepare(), Err(OrmLiteError::Statement(_))));

    let mut qb = QueryBuilder::new(dialect, foo.clone());
    qb.where_();
    assert!(matches!(qb.prepare(), Err(OrmLiteError::Statement(_))));

    let ub = UpdateBuilder::new(dialect, foo);
    assert!(matches!(ub.prepare(), Err(OrmLiteError::Statement(_))));

    // name is declared can_be_null = false
    let mut ub = UpdateBuilder::new(dialect, common::account_table(dialect));
    ub.update_column_value("name", SqlValue::Null);
    assert!(matches!(ub.prepare(), Err(OrmLiteError::Conversion(_))));
}

#[test]
fn account_queries_convert_through_field_converters() {
    let dialect = Dialect::Derby;
    let table = common::account_table(dialect);

    let mut qb = QueryBuilder::new(dialect, table.clone());
    qb.select_columns(["id", "name"])
        .order_by("name", false)
        .limit(10)
        .offset(20);
    qb.where_()
        .eq("active", true)
        .and()
        .eq("grade", 'A')
        .and()
        .eq("status", ormlite::EnumConstant::new("CLOSED", 1));
    let query = qb.prepare().unwrap();
    assert_eq!(
        query.sql(),
        r#"SELECT "id", "name" FROM "account" WHERE "active" = ? AND "grade" = ? AND "status" = ? ORDER BY "name" DESC OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"#
    );
    assert_eq!(
        values(&query),
        vec![
            SqlValue::Byte(1),
            SqlValue::Text("A".into()),
            SqlValue::Text("CLOSED".into()),
        ]
    );
    assert_eq!(
        query.inline_sql().unwrap(),
        r#"SELECT "id", "name" FROM "account" WHERE "active" = 1 AND "grade" = 'A' AND "status" = 'CLOSED' ORDER BY "name" DESC OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"#
    );

    let mut count = QueryBuilder::new(dialect, table);
    count.count_of();
    assert_eq!(count.prepare().unwrap().kind(), StatementKind::SelectLong);
}
