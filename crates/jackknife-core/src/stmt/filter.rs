use super::Arg;

/// A filter operator together with its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Equal(Arg),
    NotEqual(Arg),
    /// Substring match
    Contains(Arg),
    StartsWith(Arg),
    EndsWith(Arg),
    GreaterThan(Arg),
    LessThan(Arg),
    GreaterOrEqual(Arg),
    LessOrEqual(Arg),
    In(Vec<Arg>),
    NotIn(Vec<Arg>),
    /// Inclusive range
    Between(Arg, Arg),
    IsNull,
    IsNotNull,
}

/// One `(column, operator, operands)` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub op: Op,
}

/// Conditions combined with `AND`, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    pub fn push(&mut self, column: impl Into<String>, op: Op) {
        self.conditions.push(Condition {
            column: column.into(),
            op,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Operand values in placeholder order.
    pub fn args(&self) -> impl Iterator<Item = &Arg> + '_ {
        self.conditions
            .iter()
            .flat_map(|condition| condition.op.args())
    }
}

impl Op {
    /// Operands in the order they appear in the rendered condition.
    pub fn args(&self) -> Vec<&Arg> {
        match self {
            Op::Equal(arg)
            | Op::NotEqual(arg)
            | Op::Contains(arg)
            | Op::StartsWith(arg)
            | Op::EndsWith(arg)
            | Op::GreaterThan(arg)
            | Op::LessThan(arg)
            | Op::GreaterOrEqual(arg)
            | Op::LessOrEqual(arg) => vec![arg],
            Op::In(args) | Op::NotIn(args) => args.iter().collect(),
            Op::Between(low, high) => vec![low, high],
            Op::IsNull | Op::IsNotNull => vec![],
        }
    }
}
