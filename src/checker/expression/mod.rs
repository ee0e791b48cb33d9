pub mod comparison_with_bool;
pub mod multiple_unary_operator;
pub mod mutable_variable;
pub mod redundant_cast;
pub mod redundant_conditional_operator;
pub mod redundant_local_variable;
pub mod use_named_logic_operator;

use super::registry::CheckerRegistry;

pub fn register_all(registry: &mut CheckerRegistry) {
    registry.register(Box::new(redundant_cast::RedundantCast));
    registry.register(Box::new(
        redundant_conditional_operator::RedundantConditionalOperator,
    ));
    registry.register(Box::new(redundant_local_variable::RedundantLocalVariable));
    registry.register(Box::new(multiple_unary_operator::MultipleUnaryOperator));
    registry.register(Box::new(use_named_logic_operator::UseNamedLogicOperator));
    registry.register(Box::new(mutable_variable::MutableVariable));
    registry.register(Box::new(comparison_with_bool::ComparisonWithBool));
}
