pub mod assignment_in_if_condition;
pub mod avoid_branching_statement_as_last_in_loop;
pub mod collapsible_if_statements;
pub mod for_loop_should_be_while_loop;
pub mod goto_statement;
pub mod inverted_logic;
pub mod redundant_if_statement;
pub mod unnecessary_else_statement;
pub mod unnecessary_empty_condition;

use super::registry::CheckerRegistry;

pub fn register_all(registry: &mut CheckerRegistry) {
    registry.register(Box::new(
        avoid_branching_statement_as_last_in_loop::AvoidBranchingStatementAsLastInLoop,
    ));
    registry.register(Box::new(collapsible_if_statements::CollapsibleIfStatements));
    registry.register(Box::new(for_loop_should_be_while_loop::ForLoopShouldBeWhileLoop));
    registry.register(Box::new(goto_statement::GotoStatement));
    registry.register(Box::new(unnecessary_empty_condition::UnnecessaryEmptyCondition));
    registry.register(Box::new(unnecessary_else_statement::UnnecessaryElseStatement));
    registry.register(Box::new(redundant_if_statement::RedundantIfStatement));
    registry.register(Box::new(inverted_logic::InvertedLogic));
    registry.register(Box::new(assignment_in_if_condition::AssignmentInIfCondition));
}
