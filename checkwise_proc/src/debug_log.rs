//SPDX-License-Identifier: MIT OR Apache-2.0

use crate::parser::{LogArg, parse_args};
use proc_macro::{TokenStream, TokenTree};
use std::collections::VecDeque;

pub fn debug_log_impl(input: TokenStream) -> TokenStream {
    let mut input: VecDeque<_> = input.into_iter().collect();
    let args = parse_args(&mut input);
    let setup = r#"
        let __checkwise_logger_owner = checkwise::global_logger::debug_logger();
        let __checkwise_logger: &checkwise::DebugLogger = &__checkwise_logger_owner;
    "#;
    expand(setup, &args)
}

pub fn debug_log_to_impl(input: TokenStream) -> TokenStream {
    let mut input: VecDeque<TokenTree> = input.into_iter().collect();
    let mut args = parse_args(&mut input).into_iter();
    let logger = match args.next() {
        Some(LogArg::Expr(expr)) => expr,
        _ => {
            return r#"compile_error!("debug_log_to!() must be called with a logger expression first")"#
                .parse()
                .unwrap();
        }
    };
    let setup = format!(
        "let __checkwise_logger: &checkwise::DebugLogger = &({LOGGER});",
        LOGGER = logger
    );
    let rest: Vec<LogArg> = args.collect();
    expand(&setup, &rest)
}

fn expand(setup: &str, args: &[LogArg]) -> TokenStream {
    //arguments are evaluated in the caller's scope, so `?` and `.await` keep working;
    //only the inspection runs inside the guard
    let mut bindings = String::new();
    let mut writes = String::new();
    for (index, arg) in args.iter().enumerate() {
        match arg {
            LogArg::Literal(lit) => {
                writes.push_str("__checkwise_formatter.write_literal(");
                writes.push_str(lit);
                writes.push_str(");\n");
            }
            LogArg::Expr(expr) => {
                bindings.push_str(&format!(
                    "let __checkwise_arg{index} = &({expr});\n"
                ));
                writes.push_str(&format!(
                    "__checkwise_formatter.write_val((&&checkwise::hidden::Arg(__checkwise_arg{index})).inspect());\n"
                ));
            }
        }
    }
    let src = format!(
        r#"
        {{
            {SETUP}
            if __checkwise_logger.is_development() {{
                #[allow(unused_imports)]
                use checkwise::hidden::{{InspectDebug as _, InspectText as _}};
                {BINDINGS}
                let mut __checkwise_record = checkwise::hidden::debug_log_pre(file!(), line!(), checkwise::function_name!());
                let __checkwise_completed = checkwise::hidden::guard(|| {{
                    #[allow(unused_mut, unused_variables)]
                    let mut __checkwise_formatter = checkwise::hidden::ArgFormatter::new(&mut __checkwise_record);
                    {WRITES}
                }});
                if __checkwise_completed {{
                    checkwise::hidden::debug_log_post(__checkwise_logger, __checkwise_record);
                }}
            }}
        }}
    "#,
        SETUP = setup,
        BINDINGS = bindings,
        WRITES = writes
    );
    src.parse().unwrap()
}
