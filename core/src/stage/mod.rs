//! Compiled expression trees.
//!
//! A [`Stage`] is one node of an immutable binary tree. Each stage carries an
//! [`OperatorSymbol`], up to two child stages, the operator body that combines
//! the children's values, optional operand type checks, and, for function
//! calls, a [`FunctionCallInfo`].
//!
//! Turning source text into stages is the job of an external compiler; the
//! constructors in this module (`Stage::and`, `Stage::call`, ...) are what it
//! uses to build the tree.
//!
//! ## Example
//!
//! ```ignore
//! use scopeval_core::stage::{ComparisonOp, Stage, host_function};
//!
//! // prefix(key, "7/") && time >= 10
//! let prefix = host_function(|args| { /* ... */ });
//! let tree = Stage::and(
//!     Stage::call("prefix", prefix, vec![Stage::variable("key"), Stage::literal("7/")]),
//!     Stage::compare(ComparisonOp::Gte, Stage::variable("time"), Stage::literal(10)),
//! );
//! ```

mod builder;
mod function;
mod stage;
mod symbol;
pub mod typecheck;

pub use builder::host_function;
pub use function::{ExpressionFunction, FunctionCallInfo};
pub use stage::{Operator, Stage};
pub use symbol::{ArithmeticOp, ComparisonOp, OperatorSymbol};
pub use typecheck::{JointTypeCheck, TypeCheck, TypeChecks};

static_assertions::assert_impl_all!(Stage: Send, Sync, Clone);
static_assertions::assert_impl_all!(FunctionCallInfo: Send, Sync);
