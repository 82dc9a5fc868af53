//! Source fixtures
//!
//! Model files in the shapes editors commonly produce.

use modelsync_core::{ScriptLanguage, SourceDocument};

/// The smallest model: a namespace and a state
pub fn fixture_count_model() -> &'static str {
    "export default { namespace: 'count', state: 0, reducers: {} };"
}

/// A multi-line model with every container populated
pub fn fixture_full_model(namespace: &str) -> String {
    format!(
        r#"import {{ fetchUsers }} from '../services/users';

// users model
export default {{
  namespace: '{namespace}',

  state: {{
    list: [],
    total: 0,
    filter: {{ page: 1, size: -20 }},
  }},

  reducers: {{
    save(state, {{ payload }}) {{
      return {{ ...state, ...payload }};
    }},
    reset: () => ({{ list: [], total: 0 }}),
  }},

  effects: {{
    *fetch({{ payload }}, {{ call, put }}) {{
      const data = yield call(fetchUsers, payload);
      dispatch({{ type: '{namespace}/save', payload: data }});
    }},
  }},

  subscriptions: {{
    setup({{ dispatch, history }}) {{
      return history.listen(({{ pathname }}) => {{
        if (pathname === '/users') dispatch({{ type: '{namespace}/fetch' }});
        dispatch('{namespace}/reset');
      }});
    }},
  }},
}};
"#
    )
}

/// A model with comments inside its containers
pub fn fixture_commented_model() -> &'static str {
    r#"export default {
  namespace: 'todo',
  state: [], // items
  reducers: {
    // create
    add(state, { payload }) {
      return [...state, payload];
    },
    toggle: (state, { id }) => state, // flips done
    /* bulk */
    clear: () => [],
  },
  effects: {
    // nothing yet
  },
};
"#
}

/// A plain object that looks like a model but is not one
pub fn fixture_lookalike() -> &'static str {
    "export const meta = { namespace: 'meta', title: 'Users' };\n"
}

/// Parse with the default dialect, panicking on error
pub fn parse(source: &str) -> SourceDocument {
    SourceDocument::parse(source, ScriptLanguage::Tsx).expect("fixture should parse")
}
