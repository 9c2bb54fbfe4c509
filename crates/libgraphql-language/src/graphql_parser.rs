//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with any
//! token source implementing [`GraphQLTokenSource`]. One document may mix
//! executable definitions (operations, fragments) and type-system definitions.
//!
//! # Architecture
//!
//! The parser keeps exactly one token of lookahead (see
//! [`GraphQLTokenStream`]). Each grammar rule has a corresponding `parse_*`
//! method returning `Result<node, GraphQLParseError>`. The first error aborts
//! the whole parse; there is no recovery and no partial result.
//!
//! Keywords are soft: the lexer produces plain names and only the grammar
//! positions that accept a keyword compare the name's text.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::ScalarTypeDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserConfig;
use crate::GraphQLTokenStream;
use crate::Keyword;
use std::borrow::Cow;

/// Context for parsing values, determining whether variables are allowed.
///
/// This enum replaces a simple `bool` to provide context-specific error
/// notes when variables appear in const-only contexts.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Variables are allowed (field and directive arguments).
    AllowVariables,
    /// Parsing the default value of a variable definition.
    VariableDefaultValue,
    /// Parsing the default value of an argument or input field definition.
    InputDefaultValue,
}

impl ConstContext {
    fn allows_variables(&self) -> bool {
        matches!(self, Self::AllowVariables)
    }

    /// Only called when variables are disallowed.
    fn description(&self) -> &'static str {
        match self {
            Self::AllowVariables => "arguments",
            Self::VariableDefaultValue => "variable default values",
            Self::InputDefaultValue => "input value default values",
        }
    }
}

/// A recursive descent parser producing a [`Document`].
///
/// A parser instance is single-use: [`parse_document`](Self::parse_document)
/// consumes it. Independent instances share no state and may run on
/// separate threads.
///
/// # Example
///
/// ```rust
/// use libgraphql_language::GraphQLParser;
///
/// let doc = GraphQLParser::new("{ hero { name } }").parse_document().unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    config: GraphQLParserConfig,
    recursion_depth: usize,
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over `source` with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source))
    }

    /// Creates a parser over `source` with a custom configuration.
    pub fn with_config(source: &'src str, config: GraphQLParserConfig) -> Self {
        Self::from_token_source_with_config(StrGraphQLTokenSource::new(source), config)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a parser over an arbitrary token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self::from_token_source_with_config(token_source, GraphQLParserConfig::default())
    }

    pub fn from_token_source_with_config(
        token_source: TTokenSource,
        config: GraphQLParserConfig,
    ) -> Self {
        Self {
            config,
            recursion_depth: 0,
            token_stream: GraphQLTokenStream::new(token_source),
        }
    }

    /// Parses a complete document.
    ///
    /// The document must contain at least one definition; empty input fails
    /// with an unexpected-token error naming the EOF token.
    pub fn parse_document(mut self) -> Result<Document, GraphQLParseError> {
        log::trace!("parsing GraphQL document");
        let result = self.parse_document_definitions();
        match &result {
            Ok(document) => log::trace!(
                "parsed GraphQL document with {} definition(s)",
                document.definitions.len(),
            ),
            Err(error) => log::debug!(
                "failed to parse GraphQL document: {}",
                error.format_oneline(),
            ),
        }
        result
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_token(&self) -> &GraphQLToken<'src> {
        self.token_stream.peek()
    }

    /// Consumes the lookahead token and returns it.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        Ok(self.token_stream.advance()?)
    }

    /// Returns `true` if the lookahead token has kind `kind`.
    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.peek_token().kind == kind
    }

    /// Returns `true` if the lookahead token is the name `keyword`.
    fn peek_keyword(&self, keyword: Keyword) -> bool {
        self.peek_token().is_name(keyword.as_str())
    }

    /// The definition keyword the lookahead token spells, if any.
    fn peek_definition_keyword(&self) -> Option<Keyword> {
        let token = self.peek_token();
        if token.kind != GraphQLTokenKind::Name {
            return None;
        }
        token.value.as_deref().and_then(Keyword::definition_keyword)
    }

    /// Consumes the lookahead token if it has kind `kind`.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLParseError> {
        if self.peek(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of kind `kind`, or fails with
    /// [`WrongTokenKind`](GraphQLParseErrorKind::WrongTokenKind).
    fn expect(&mut self, kind: GraphQLTokenKind) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek(kind) {
            return self.advance();
        }
        let found = self.peek_token();
        Err(GraphQLParseError::new(
            GraphQLParseErrorKind::WrongTokenKind {
                expected: kind,
                found: found.kind,
            },
            found.span,
        ))
    }

    /// Consumes the name `keyword`, or fails with
    /// [`UnexpectedKeyword`](GraphQLParseErrorKind::UnexpectedKeyword).
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_keyword(keyword) {
            return self.advance();
        }
        let found = self.peek_token().clone().into_owned();
        let span = found.span;
        Err(GraphQLParseError::new(
            GraphQLParseErrorKind::UnexpectedKeyword {
                expected: keyword,
                found,
            },
            span,
        ))
    }

    /// An [`UnexpectedToken`](GraphQLParseErrorKind::UnexpectedToken) error
    /// for the lookahead token.
    fn unexpected(&self) -> GraphQLParseError {
        unexpected_token(self.peek_token().clone())
    }

    /// `open item* close`
    fn zero_or_more<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLParseError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLParseError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// `open item+ close`
    fn one_or_more<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLParseError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLParseError> {
        self.expect(open)?;
        let mut items = vec![parse_item(self)?];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// Runs `parse` one nesting level deeper, failing once the configured
    /// maximum depth would be exceeded.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, GraphQLParseError>,
    ) -> Result<T, GraphQLParseError> {
        let limit = self.config.max_recursion_depth;
        if self.recursion_depth >= limit {
            return Err(GraphQLParseError::new(
                GraphQLParseErrorKind::RecursionLimitExceeded { limit },
                self.peek_token().span,
            ));
        }
        self.recursion_depth += 1;
        let result = parse(self);
        self.recursion_depth -= 1;
        result
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    fn parse_document_definitions(&mut self) -> Result<Document, GraphQLParseError> {
        // Prime the lookahead.
        self.advance()?;

        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.token_stream.is_at_end() {
                break;
            }
        }
        Ok(Document { definitions })
    }

    fn parse_definition(&mut self) -> Result<Definition, GraphQLParseError> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Definition::OperationDefinition(self.parse_operation_definition()?));
        }

        match self.peek_definition_keyword() {
            Some(Keyword::Query | Keyword::Mutation | Keyword::Subscription) => {
                Ok(Definition::OperationDefinition(self.parse_operation_definition()?))
            },
            Some(Keyword::Fragment) => {
                Ok(Definition::FragmentDefinition(self.parse_fragment_definition()?))
            },
            Some(Keyword::Extend) => {
                Ok(Definition::TypeExtension(self.parse_type_extension_definition()?))
            },
            Some(_) => Ok(Definition::TypeDefinition(self.parse_type_definition()?)),
            None => Err(self.unexpected()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, GraphQLParseError> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(OperationDefinition {
                directives: Vec::new(),
                name: None,
                operation: OperationType::Query,
                selection_set: self.parse_selection_set()?,
                variable_definitions: Vec::new(),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            directives,
            name,
            operation,
            selection_set,
            variable_definitions,
        })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        let operation = token
            .value
            .as_deref()
            .and_then(Keyword::from_name)
            .and_then(OperationType::from_keyword);
        operation.ok_or_else(|| unexpected_token(token))
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, GraphQLParseError> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.one_or_more(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition, GraphQLParseError> {
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };

        Ok(VariableDefinition {
            default_value,
            var_type,
            variable,
        })
    }

    fn parse_variable(&mut self) -> Result<Variable, GraphQLParseError> {
        self.expect(GraphQLTokenKind::Dollar)?;
        Ok(Variable {
            name: self.parse_name()?,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<SelectionSet, GraphQLParseError> {
        self.nested(|parser| {
            let selections = parser.one_or_more(
                GraphQLTokenKind::CurlyBraceOpen,
                Self::parse_selection,
                GraphQLTokenKind::CurlyBraceClose,
            )?;
            Ok(SelectionSet { selections })
        })
    }

    fn parse_selection(&mut self) -> Result<Selection, GraphQLParseError> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// `alias: name(args) @dirs { ... }` where the alias, arguments,
    /// directives, and selection set are all optional.
    fn parse_field(&mut self) -> Result<Field, GraphQLParseError> {
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            arguments,
            directives,
            name,
            selection_set,
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, GraphQLParseError> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.one_or_more(
            GraphQLTokenKind::ParenOpen,
            Self::parse_argument,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self) -> Result<Argument, GraphQLParseError> {
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(ConstContext::AllowVariables)?;
        Ok(Argument { name, value })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses what follows `...`: a named spread unless the next token is
    /// the name `on`, an inline fragment otherwise.
    fn parse_fragment(&mut self) -> Result<Selection, GraphQLParseError> {
        self.expect(GraphQLTokenKind::Ellipsis)?;

        if self.peek(GraphQLTokenKind::Name) && !self.peek_keyword(Keyword::On) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread { directives, name }));
        }

        let type_condition = if self.peek_keyword(Keyword::On) {
            self.advance()?;
            Some(self.parse_name()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(Selection::InlineFragment(InlineFragment {
            directives,
            selection_set,
            type_condition,
        }))
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Fragment)?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword(Keyword::On)?;
        let type_condition = self.parse_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            directives,
            name,
            selection_set,
            type_condition,
        })
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> Result<Name, GraphQLParseError> {
        if self.peek_keyword(Keyword::On) {
            return Err(self.unexpected());
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> Result<Value, GraphQLParseError> {
        self.nested(|parser| parser.parse_value_at_depth(context))
    }

    fn parse_value_at_depth(&mut self, context: ConstContext) -> Result<Value, GraphQLParseError> {
        match self.peek_token().kind {
            GraphQLTokenKind::SquareBracketOpen => {
                let values = self.zero_or_more(
                    GraphQLTokenKind::SquareBracketOpen,
                    |parser| parser.parse_value(context),
                    GraphQLTokenKind::SquareBracketClose,
                )?;
                Ok(Value::List(values))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                let fields = self.zero_or_more(
                    GraphQLTokenKind::CurlyBraceOpen,
                    |parser| parser.parse_object_field(context),
                    GraphQLTokenKind::CurlyBraceClose,
                )?;
                Ok(Value::Object(fields))
            },
            GraphQLTokenKind::IntValue => Ok(Value::Int(token_text(self.advance()?))),
            GraphQLTokenKind::FloatValue => Ok(Value::Float(token_text(self.advance()?))),
            GraphQLTokenKind::StringValue => Ok(Value::String(token_text(self.advance()?))),
            GraphQLTokenKind::Name => {
                let token = self.advance()?;
                match token.value.as_deref().and_then(Keyword::from_name) {
                    Some(Keyword::True) => Ok(Value::Boolean(true)),
                    Some(Keyword::False) => Ok(Value::Boolean(false)),
                    Some(Keyword::Null) => {
                        let mut error = unexpected_token(token);
                        error.add_note("`null` is not a supported value literal");
                        Err(error)
                    },
                    _ => Ok(Value::Enum(token_text(token))),
                }
            },
            GraphQLTokenKind::Dollar if context.allows_variables() => {
                Ok(Value::Variable(self.parse_variable()?))
            },
            GraphQLTokenKind::Dollar => {
                let mut error = self.unexpected();
                error.add_note(format!(
                    "variables are not allowed in {}",
                    context.description(),
                ));
                Err(error)
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object_field(&mut self, context: ConstContext) -> Result<ObjectField, GraphQLParseError> {
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ObjectField { name, value })
    }

    // =========================================================================
    // Directives, names, and types
    // =========================================================================

    fn parse_directives(&mut self) -> Result<Vec<DirectiveAnnotation>, GraphQLParseError> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self) -> Result<DirectiveAnnotation, GraphQLParseError> {
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(DirectiveAnnotation { arguments, name })
    }

    fn parse_name(&mut self) -> Result<Name, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(Name::new(token_text(token)))
    }

    /// `[Type]` or `Name`, followed by at most one `!`.
    fn parse_type(&mut self) -> Result<TypeAnnotation, GraphQLParseError> {
        self.nested(|parser| {
            let inner = if parser.skip(GraphQLTokenKind::SquareBracketOpen)? {
                let item_type = parser.parse_type()?;
                parser.expect(GraphQLTokenKind::SquareBracketClose)?;
                TypeAnnotation::List(Box::new(item_type))
            } else {
                TypeAnnotation::Named(parser.parse_name()?)
            };

            if parser.skip(GraphQLTokenKind::Bang)? {
                Ok(TypeAnnotation::NonNull(Box::new(inner)))
            } else {
                Ok(inner)
            }
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_type_definition(&mut self) -> Result<TypeDefinition, GraphQLParseError> {
        match self.peek_definition_keyword() {
            Some(Keyword::Type) => Ok(TypeDefinition::Object(self.parse_object_type_definition()?)),
            Some(Keyword::Interface) => {
                Ok(TypeDefinition::Interface(self.parse_interface_type_definition()?))
            },
            Some(Keyword::Union) => Ok(TypeDefinition::Union(self.parse_union_type_definition()?)),
            Some(Keyword::Scalar) => {
                Ok(TypeDefinition::Scalar(self.parse_scalar_type_definition()?))
            },
            Some(Keyword::Enum) => Ok(TypeDefinition::Enum(self.parse_enum_type_definition()?)),
            Some(Keyword::Input) => {
                Ok(TypeDefinition::InputObject(self.parse_input_object_type_definition()?))
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object_type_definition(&mut self) -> Result<ObjectTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Type)?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition {
            fields,
            interfaces,
            name,
        })
    }

    /// `implements A B C`, ended by the `{` that opens the field block.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<Name>, GraphQLParseError> {
        if !self.peek_keyword(Keyword::Implements) {
            return Ok(Vec::new());
        }
        self.advance()?;

        let mut interfaces = Vec::new();
        loop {
            interfaces.push(self.parse_name()?);
            if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
                break;
            }
        }
        Ok(interfaces)
    }

    /// `{ FieldDefinition+ }`; an empty `{}` body is a syntax error.
    fn parse_fields_definition(&mut self) -> Result<Vec<FieldDefinition>, GraphQLParseError> {
        self.one_or_more(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition, GraphQLParseError> {
        let name = self.parse_name()?;
        let arguments = if self.peek(GraphQLTokenKind::ParenOpen) {
            self.one_or_more(
                GraphQLTokenKind::ParenOpen,
                Self::parse_input_value_definition,
                GraphQLTokenKind::ParenClose,
            )?
        } else {
            Vec::new()
        };
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;

        Ok(FieldDefinition {
            arguments,
            field_type,
            name,
        })
    }

    fn parse_input_value_definition(&mut self) -> Result<InputValueDefinition, GraphQLParseError> {
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };

        Ok(InputValueDefinition {
            default_value,
            name,
            value_type,
        })
    }

    fn parse_interface_type_definition(&mut self) -> Result<InterfaceTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Interface)?;
        let name = self.parse_name()?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition { fields, name })
    }

    fn parse_union_type_definition(&mut self) -> Result<UnionTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Union)?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Equals)?;

        let mut types = vec![self.parse_name()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            types.push(self.parse_name()?);
        }
        Ok(UnionTypeDefinition { name, types })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<ScalarTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Scalar)?;
        Ok(ScalarTypeDefinition {
            name: self.parse_name()?,
        })
    }

    fn parse_enum_type_definition(&mut self) -> Result<EnumTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Enum)?;
        let name = self.parse_name()?;
        let values = self.one_or_more(
            GraphQLTokenKind::CurlyBraceOpen,
            |parser| Ok(EnumValueDefinition { name: parser.parse_name()? }),
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(EnumTypeDefinition { name, values })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<InputObjectTypeDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Input)?;
        let name = self.parse_name()?;
        let fields = self.one_or_more(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_input_value_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(InputObjectTypeDefinition { fields, name })
    }

    fn parse_type_extension_definition(
        &mut self,
    ) -> Result<TypeExtensionDefinition, GraphQLParseError> {
        self.expect_keyword(Keyword::Extend)?;
        Ok(TypeExtensionDefinition {
            definition: self.parse_object_type_definition()?,
        })
    }
}

/// An [`UnexpectedToken`](GraphQLParseErrorKind::UnexpectedToken) error
/// naming `token`.
fn unexpected_token(token: GraphQLToken<'_>) -> GraphQLParseError {
    let span = token.span;
    GraphQLParseError::new(
        GraphQLParseErrorKind::UnexpectedToken {
            found: token.into_owned(),
        },
        span,
    )
}

/// The owned value of a name, number, or string token.
fn token_text(token: GraphQLToken<'_>) -> String {
    token.value.map(Cow::into_owned).unwrap_or_default()
}
