//! WHERE clause builder
//!
//! Clauses are pushed on a stack. `and()`/`or()` take the last clause as the
//! left operand and combine it with the next one; `not()` negates the next
//! clause; `and_many(n)`/`or_many(n)` combine the last `n`. Column lookups,
//! comparability checks and value conversions happen as clauses are added.
//! The first failure is kept and returned by every render.

use super::clause::{
    Between, Clause, CompareOp, Exists, In, InSubQuery, IsNotNull, IsNull, ManyClause, ManyOp, Not,
    Raw, Rhs, SimpleComparison,
};
use super::{ArgumentHolder, ColumnArg, InternalQueryBuilderWrapper, SelectArg, stash};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::table::TableInfo;
use crate::value::{EnumConstant, SqlValue};
use chrono::NaiveDateTime;
use ormlite_types::Dialect;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Right-hand operand of a comparison.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A native value, converted with the column's converter.
    Value(SqlValue),
    /// A value supplied after preparation.
    SelectArg(SelectArg),
    /// Another column.
    Column(ColumnArg),
}

impl From<SqlValue> for Operand {
    fn from(value: SqlValue) -> Self {
        Operand::Value(value)
    }
}

impl From<SelectArg> for Operand {
    fn from(arg: SelectArg) -> Self {
        Operand::SelectArg(arg)
    }
}

impl From<&SelectArg> for Operand {
    fn from(arg: &SelectArg) -> Self {
        Operand::SelectArg(arg.clone())
    }
}

impl From<ColumnArg> for Operand {
    fn from(column: ColumnArg) -> Self {
        Operand::Column(column)
    }
}

macro_rules! impl_operand_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Value(value.into())
                }
            }
        )*
    };
}

impl_operand_from_value!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    f32,
    f64,
    i128,
    &str,
    String,
    Vec<u8>,
    Decimal,
    Uuid,
    NaiveDateTime,
    EnumConstant,
    serde_json::Value,
);

#[derive(Debug)]
enum Pending {
    And(Box<dyn Clause>),
    Or(Box<dyn Clause>),
    Not,
}

/// Builder for the boolean expression of a WHERE clause.
#[derive(Debug)]
pub struct Where {
    dialect: Dialect,
    table: Arc<TableInfo>,
    clauses: Vec<Box<dyn Clause>>,
    pending: Vec<Pending>,
    error: Option<OrmLiteError>,
}

impl Where {
    pub fn new(dialect: Dialect, table: Arc<TableInfo>) -> Self {
        Self {
            dialect,
            table,
            clauses: Vec::new(),
            pending: Vec::new(),
            error: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.pending.is_empty()
    }

    pub fn eq(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Eq, value.into())
    }

    pub fn ne(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Ne, value.into())
    }

    pub fn gt(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Gt, value.into())
    }

    pub fn ge(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Ge, value.into())
    }

    pub fn lt(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Lt, value.into())
    }

    pub fn le(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Le, value.into())
    }

    pub fn like(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        self.comparison(column, CompareOp::Like, value.into())
    }

    /// `column = value` on the table's id column.
    pub fn id_eq(&mut self, value: impl Into<Operand>) -> &mut Self {
        let column = match self.table.id_field() {
            Some(id) => id.column_name().to_owned(),
            None => {
                let err = OrmLiteError::Statement(format!(
                    "table '{}' has no id field",
                    self.table.table_name()
                ));
                return self.fail(err);
            }
        };
        self.comparison(&column, CompareOp::Eq, value.into())
    }

    pub fn between(
        &mut self,
        column: &str,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> &mut Self {
        let clause = self.comparable_field(column).and_then(|field| {
            let low = Self::argument(field, low.into())?;
            let high = Self::argument(field, high.into())?;
            Ok(Between::new(column, low, high))
        });
        self.add_result(clause)
    }

    pub fn in_<I>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.membership(column, values, false)
    }

    pub fn not_in<I>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.membership(column, values, true)
    }

    /// `column IN (<sub-query>)`. The sub-query must select one column.
    pub fn in_subquery(
        &mut self,
        column: &str,
        sub_query: impl InternalQueryBuilderWrapper + 'static,
    ) -> &mut Self {
        let clause = self
            .field(column)
            .and_then(|_| InSubQuery::new(column, Box::new(sub_query), false));
        self.add_result(clause)
    }

    pub fn not_in_subquery(
        &mut self,
        column: &str,
        sub_query: impl InternalQueryBuilderWrapper + 'static,
    ) -> &mut Self {
        let clause = self
            .field(column)
            .and_then(|_| InSubQuery::new(column, Box::new(sub_query), true));
        self.add_result(clause)
    }

    pub fn is_null(&mut self, column: &str) -> &mut Self {
        let clause = self.field(column).map(|_| IsNull::new(column));
        self.add_result(clause)
    }

    pub fn is_not_null(&mut self, column: &str) -> &mut Self {
        let clause = self.field(column).map(|_| IsNotNull::new(column));
        self.add_result(clause)
    }

    pub fn exists(&mut self, sub_query: impl InternalQueryBuilderWrapper + 'static) -> &mut Self {
        self.add_clause(Box::new(Exists::new(Box::new(sub_query))))
    }

    pub fn not_exists(&mut self, sub_query: impl InternalQueryBuilderWrapper + 'static) -> &mut Self {
        let exists = Box::new(Exists::new(Box::new(sub_query)));
        self.add_clause(Box::new(Not::new(exists)))
    }

    /// Raw SQL with its arguments, added as one clause.
    pub fn raw(&mut self, sql: &str, args: impl IntoIterator<Item = ArgumentHolder>) -> &mut Self {
        self.add_clause(Box::new(Raw::new(sql, args.into_iter().collect())))
    }

    /// `column <operator> ?` with an operator the builder does not model.
    /// The column is not looked up and the value is bound as given.
    pub fn raw_comparison(
        &mut self,
        column: &str,
        operator: &str,
        value: impl Into<SqlValue>,
    ) -> &mut Self {
        let rhs = Rhs::Arg(ArgumentHolder::raw(value));
        self.add_clause(Box::new(SimpleComparison::with_raw_operator(
            column, operator, rhs,
        )))
    }

    /// Combines the previous clause with the next one using `AND`.
    pub fn and(&mut self) -> &mut Self {
        match self.clauses.pop() {
            Some(left) => self.pending.push(Pending::And(left)),
            None => {
                let err = OrmLiteError::Statement("and() needs a clause before it".into());
                return self.fail(err);
            }
        }
        self
    }

    /// Combines the previous clause with the next one using `OR`.
    pub fn or(&mut self) -> &mut Self {
        match self.clauses.pop() {
            Some(left) => self.pending.push(Pending::Or(left)),
            None => {
                let err = OrmLiteError::Statement("or() needs a clause before it".into());
                return self.fail(err);
            }
        }
        self
    }

    /// Negates the next clause.
    pub fn not(&mut self) -> &mut Self {
        self.pending.push(Pending::Not);
        self
    }

    /// Combines the last `n` clauses using `AND`.
    pub fn and_many(&mut self, n: usize) -> &mut Self {
        self.combine_last(n, ManyOp::And)
    }

    /// Combines the last `n` clauses using `OR`.
    pub fn or_many(&mut self, n: usize) -> &mut Self {
        self.combine_last(n, ManyOp::Or)
    }

    /// Renders the expression, without the `WHERE` keyword.
    pub fn append_sql(
        &self,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.reproduce());
        }
        if !self.pending.is_empty() {
            return Err(OrmLiteError::Statement(
                "and(), or() or not() is missing the clause that follows it".into(),
            ));
        }
        match self.clauses.as_slice() {
            [] => Err(OrmLiteError::Statement(
                "no where clauses defined; did you miss a where operation?".into(),
            )),
            [clause] => clause.append_sql(self.dialect, table_name, sb, args),
            more => Err(OrmLiteError::Statement(format!(
                "{} clauses were added without and()/or() between them",
                more.len()
            ))),
        }
    }

    fn fail(&mut self, err: OrmLiteError) -> &mut Self {
        stash(&mut self.error, err);
        self
    }

    fn field(&self, column: &str) -> Result<&FieldType> {
        self.table.field_for_column(column)
    }

    fn comparable_field(&self, column: &str) -> Result<&FieldType> {
        let field = self.field(column)?;
        if !field.converter().is_comparable() {
            return Err(OrmLiteError::Statement(format!(
                "column '{column}' of type {} cannot be compared",
                field.data_type()
            )));
        }
        Ok(field)
    }

    fn argument(field: &FieldType, operand: Operand) -> Result<ArgumentHolder> {
        match operand {
            Operand::Value(value) if value.is_null() => Err(OrmLiteError::Statement(format!(
                "argument for column '{}' is null; use is_null() instead",
                field.column_name()
            ))),
            Operand::Value(value) => ArgumentHolder::for_field(field, &value),
            Operand::SelectArg(arg) => ArgumentHolder::select_arg(field, &arg),
            Operand::Column(column) => Err(OrmLiteError::Statement(format!(
                "column '{}' cannot be used as a value for '{}'",
                column.column,
                field.column_name()
            ))),
        }
    }

    fn comparison(&mut self, column: &str, op: CompareOp, operand: Operand) -> &mut Self {
        let clause = self.comparable_field(column).and_then(|field| {
            let rhs = match operand {
                Operand::Column(other) => {
                    if other.table.is_none() {
                        self.field(&other.column)?;
                    }
                    Rhs::Column(other)
                }
                operand => Rhs::Arg(Self::argument(field, operand)?),
            };
            Ok(SimpleComparison::new(column, op, rhs))
        });
        self.add_result(clause)
    }

    fn membership<I>(&mut self, column: &str, values: I, negated: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let clause = self.comparable_field(column).and_then(|field| {
            let args = values
                .into_iter()
                .map(|v| Self::argument(field, v.into()))
                .collect::<Result<Vec<_>>>()?;
            In::new(column, args, negated)
        });
        self.add_result(clause)
    }

    fn combine_last(&mut self, n: usize, op: ManyOp) -> &mut Self {
        if n < 2 || n > self.clauses.len() {
            let err = OrmLiteError::Statement(format!(
                "cannot combine the last {n} clauses, {} available",
                self.clauses.len()
            ));
            return self.fail(err);
        }
        let operands = self.clauses.split_off(self.clauses.len() - n);
        let clause = ManyClause::new(op, operands);
        self.add_result(clause)
    }

    fn add_result<C: Clause + 'static>(&mut self, clause: Result<C>) -> &mut Self {
        match clause {
            Ok(clause) => self.add_clause(Box::new(clause)),
            Err(err) => self.fail(err),
        }
    }

    fn add_clause(&mut self, mut clause: Box<dyn Clause>) -> &mut Self {
        while let Some(pending) = self.pending.pop() {
            let combined = match pending {
                Pending::Not => Ok(Box::new(Not::new(clause)) as Box<dyn Clause>),
                Pending::And(left) => ManyClause::new(ManyOp::And, vec![left, clause])
                    .map(|c| Box::new(c) as Box<dyn Clause>),
                Pending::Or(left) => ManyClause::new(ManyOp::Or, vec![left, clause])
                    .map(|c| Box::new(c) as Box<dyn Clause>),
            };
            match combined {
                Ok(next) => clause = next,
                Err(err) => return self.fail(err),
            }
        }
        self.clauses.push(clause);
        self
    }
}
