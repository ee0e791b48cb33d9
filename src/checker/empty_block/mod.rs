pub mod empty_do_while_statement;
pub mod empty_else_block;
pub mod empty_for_statement;
pub mod empty_if_statement;
pub mod empty_switch_statement;
pub mod empty_while_statement;
pub mod nested_blocks;

use super::registry::CheckerRegistry;

pub fn register_all(registry: &mut CheckerRegistry) {
    registry.register(Box::new(empty_if_statement::EmptyIfStatement));
    registry.register(Box::new(empty_else_block::EmptyElseBlock));
    registry.register(Box::new(empty_for_statement::EmptyForStatement));
    registry.register(Box::new(empty_while_statement::EmptyWhileStatement));
    registry.register(Box::new(empty_do_while_statement::EmptyDoWhileStatement));
    registry.register(Box::new(empty_switch_statement::EmptySwitchStatement));
    registry.register(Box::new(nested_blocks::NestedBlocks));
}
