//! PostgreSQL errcodes table.
//!
//! Keep in sync with `src/backend/utils/errcodes.txt` of the server; `cargo xtask errcodes`
//! reports drift. Names are the CamelCase form of the errcodes condition names, classes use the
//! section titles.

use crate::category::Category;

/// `(class code, class name, category)` for every SQLSTATE class.
pub(crate) const CLASSES: &[(&str, &str, Category)] = &[
    ("00", "SuccessfulCompletion", Category::DatabaseError),
    ("01", "Warning", Category::DatabaseError),
    ("02", "NoData", Category::DatabaseError),
    ("03", "SqlStatementNotYetComplete", Category::DatabaseError),
    ("08", "ConnectionException", Category::DatabaseError),
    ("09", "TriggeredActionException", Category::DatabaseError),
    ("0A", "FeatureNotSupported", Category::NotSupportedError),
    ("0B", "InvalidTransactionInitiation", Category::DatabaseError),
    ("0F", "LocatorException", Category::DatabaseError),
    ("0L", "InvalidGrantor", Category::DatabaseError),
    ("0P", "InvalidRoleSpecification", Category::DatabaseError),
    ("0Z", "DiagnosticsException", Category::DatabaseError),
    ("20", "CaseNotFound", Category::ProgrammingError),
    ("21", "CardinalityViolation", Category::ProgrammingError),
    ("22", "DataException", Category::DataError),
    ("23", "IntegrityConstraintViolation", Category::IntegrityError),
    ("24", "InvalidCursorState", Category::InternalError),
    ("25", "InvalidTransactionState", Category::InternalError),
    ("26", "InvalidSqlStatementName", Category::OperationalError),
    ("27", "TriggeredDataChangeViolation", Category::OperationalError),
    ("28", "InvalidAuthorizationSpecification", Category::OperationalError),
    ("2B", "DependentPrivilegeDescriptorsStillExist", Category::InternalError),
    ("2D", "InvalidTransactionTermination", Category::InternalError),
    ("2F", "SqlRoutineException", Category::InternalError),
    ("34", "InvalidCursorName", Category::OperationalError),
    ("38", "ExternalRoutineException", Category::InternalError),
    ("39", "ExternalRoutineInvocationException", Category::InternalError),
    ("3B", "SavepointException", Category::InternalError),
    ("3D", "InvalidCatalogName", Category::ProgrammingError),
    ("3F", "InvalidSchemaName", Category::ProgrammingError),
    ("40", "TransactionRollback", Category::TransactionRollbackError),
    ("42", "SyntaxErrorOrAccessRuleViolation", Category::ProgrammingError),
    ("44", "WithCheckOptionViolation", Category::ProgrammingError),
    ("53", "InsufficientResources", Category::OperationalError),
    ("54", "ProgramLimitExceeded", Category::OperationalError),
    ("55", "ObjectNotInPrerequisiteState", Category::OperationalError),
    ("57", "OperatorIntervention", Category::OperationalError),
    ("58", "SystemError", Category::OperationalError),
    ("F0", "ConfigurationFileError", Category::InternalError),
    ("HV", "ForeignDataWrapperError", Category::OperationalError),
    ("P0", "PlPgsqlError", Category::InternalError),
    ("XX", "InternalError", Category::InternalError),
];

/// `(code, name)` for every SQLSTATE, grouped by class.
pub(crate) const CODES: &[(&str, &str)] = &[
    // Class 00 - Successful Completion
    ("00000", "SuccessfulCompletion"),

    // Class 01 - Warning
    ("01000", "Warning"),
    ("01003", "NullValueEliminatedInSetFunction"),
    ("01006", "PrivilegeNotRevoked"),
    ("01007", "PrivilegeNotGranted"),
    ("01008", "ImplicitZeroBitPadding"),
    ("0100C", "DynamicResultSetsReturned"),
    ("01P01", "DeprecatedFeature"),

    // Class 02 - No Data
    ("02000", "NoData"),
    ("02001", "NoAdditionalDynamicResultSetsReturned"),

    // Class 03 - SQL Statement Not Yet Complete
    ("03000", "SqlStatementNotYetComplete"),

    // Class 08 - Connection Exception
    ("08000", "ConnectionException"),
    ("08001", "SqlclientUnableToEstablishSqlconnection"),
    ("08003", "ConnectionDoesNotExist"),
    ("08004", "SqlserverRejectedEstablishmentOfSqlconnection"),
    ("08006", "ConnectionFailure"),
    ("08007", "TransactionResolutionUnknown"),
    ("08P01", "ProtocolViolation"),

    // Class 09 - Triggered Action Exception
    ("09000", "TriggeredActionException"),

    // Class 0A - Feature Not Supported
    ("0A000", "FeatureNotSupported"),

    // Class 0B - Invalid Transaction Initiation
    ("0B000", "InvalidTransactionInitiation"),

    // Class 0F - Locator Exception
    ("0F000", "LocatorException"),
    ("0F001", "InvalidLocatorSpecification"),

    // Class 0L - Invalid Grantor
    ("0L000", "InvalidGrantor"),
    ("0LP01", "InvalidGrantOperation"),

    // Class 0P - Invalid Role Specification
    ("0P000", "InvalidRoleSpecification"),

    // Class 0Z - Diagnostics Exception
    ("0Z000", "DiagnosticsException"),
    ("0Z002", "StackedDiagnosticsAccessedWithoutActiveHandler"),

    // Class 20 - Case Not Found
    ("20000", "CaseNotFound"),

    // Class 21 - Cardinality Violation
    ("21000", "CardinalityViolation"),

    // Class 22 - Data Exception
    ("22000", "DataException"),
    ("22001", "StringDataRightTruncation"),
    ("22002", "NullValueNoIndicatorParameter"),
    ("22003", "NumericValueOutOfRange"),
    ("22005", "ErrorInAssignment"),
    ("22007", "InvalidDatetimeFormat"),
    ("22008", "DatetimeFieldOverflow"),
    ("22009", "InvalidTimeZoneDisplacementValue"),
    ("2200B", "EscapeCharacterConflict"),
    ("2200C", "InvalidUseOfEscapeCharacter"),
    ("2200D", "InvalidEscapeOctet"),
    ("2200F", "ZeroLengthCharacterString"),
    ("2200G", "MostSpecificTypeMismatch"),
    ("2200L", "NotAnXmlDocument"),
    ("2200M", "InvalidXmlDocument"),
    ("2200N", "InvalidXmlContent"),
    ("2200S", "InvalidXmlComment"),
    ("2200T", "InvalidXmlProcessingInstruction"),
    ("22010", "InvalidIndicatorParameterValue"),
    ("22011", "SubstringError"),
    ("22012", "DivisionByZero"),
    ("22014", "InvalidArgumentForNtileFunction"),
    ("22015", "IntervalFieldOverflow"),
    ("22016", "InvalidArgumentForNthValueFunction"),
    ("22018", "InvalidCharacterValueForCast"),
    ("22019", "InvalidEscapeCharacter"),
    ("2201B", "InvalidRegularExpression"),
    ("2201E", "InvalidArgumentForLogarithm"),
    ("2201F", "InvalidArgumentForPowerFunction"),
    ("2201G", "InvalidArgumentForWidthBucketFunction"),
    ("2201W", "InvalidRowCountInLimitClause"),
    ("2201X", "InvalidRowCountInResultOffsetClause"),
    ("22020", "InvalidLimitValue"),
    ("22021", "CharacterNotInRepertoire"),
    ("22022", "IndicatorOverflow"),
    ("22023", "InvalidParameterValue"),
    ("22024", "UnterminatedCString"),
    ("22025", "InvalidEscapeSequence"),
    ("22026", "StringDataLengthMismatch"),
    ("22027", "TrimError"),
    ("2202E", "ArraySubscriptError"),
    ("22P01", "FloatingPointException"),
    ("22P02", "InvalidTextRepresentation"),
    ("22P03", "InvalidBinaryRepresentation"),
    ("22P04", "BadCopyFileFormat"),
    ("22P05", "UntranslatableCharacter"),
    ("22P06", "NonstandardUseOfEscapeCharacter"),

    // Class 23 - Integrity Constraint Violation
    ("23000", "IntegrityConstraintViolation"),
    ("23001", "RestrictViolation"),
    ("23502", "NotNullViolation"),
    ("23503", "ForeignKeyViolation"),
    ("23505", "UniqueViolation"),
    ("23514", "CheckViolation"),
    ("23P01", "ExclusionViolation"),

    // Class 24 - Invalid Cursor State
    ("24000", "InvalidCursorState"),

    // Class 25 - Invalid Transaction State
    ("25000", "InvalidTransactionState"),
    ("25001", "ActiveSqlTransaction"),
    ("25002", "BranchTransactionAlreadyActive"),
    ("25003", "InappropriateAccessModeForBranchTransaction"),
    ("25004", "InappropriateIsolationLevelForBranchTransaction"),
    ("25005", "NoActiveSqlTransactionForBranchTransaction"),
    ("25006", "ReadOnlySqlTransaction"),
    ("25007", "SchemaAndDataStatementMixingNotSupported"),
    ("25008", "HeldCursorRequiresSameIsolationLevel"),
    ("25P01", "NoActiveSqlTransaction"),
    ("25P02", "InFailedSqlTransaction"),

    // Class 26 - Invalid SQL Statement Name
    ("26000", "InvalidSqlStatementName"),

    // Class 27 - Triggered Data Change Violation
    ("27000", "TriggeredDataChangeViolation"),

    // Class 28 - Invalid Authorization Specification
    ("28000", "InvalidAuthorizationSpecification"),
    ("28P01", "InvalidPassword"),

    // Class 2B - Dependent Privilege Descriptors Still Exist
    ("2B000", "DependentPrivilegeDescriptorsStillExist"),
    ("2BP01", "DependentObjectsStillExist"),

    // Class 2D - Invalid Transaction Termination
    ("2D000", "InvalidTransactionTermination"),

    // Class 2F - SQL Routine Exception
    ("2F000", "SqlRoutineException"),
    ("2F005", "FunctionExecutedNoReturnStatement"),

    // Class 34 - Invalid Cursor Name
    ("34000", "InvalidCursorName"),

    // Class 38 - External Routine Exception
    ("38000", "ExternalRoutineException"),
    ("38001", "ContainingSqlNotPermitted"),
    ("38002", "ModifyingSqlDataNotPermitted"),
    ("38003", "ProhibitedSqlStatementAttempted"),
    ("38004", "ReadingSqlDataNotPermitted"),

    // Class 39 - External Routine Invocation Exception
    ("39000", "ExternalRoutineInvocationException"),
    ("39001", "InvalidSqlstateReturned"),
    ("39004", "NullValueNotAllowed"),
    ("39P01", "TriggerProtocolViolated"),
    ("39P02", "SrfProtocolViolated"),

    // Class 3B - Savepoint Exception
    ("3B000", "SavepointException"),
    ("3B001", "InvalidSavepointSpecification"),

    // Class 3D - Invalid Catalog Name
    ("3D000", "InvalidCatalogName"),

    // Class 3F - Invalid Schema Name
    ("3F000", "InvalidSchemaName"),

    // Class 40 - Transaction Rollback
    ("40000", "TransactionRollback"),
    ("40001", "SerializationFailure"),
    ("40002", "TransactionIntegrityConstraintViolation"),
    ("40003", "StatementCompletionUnknown"),
    ("40P01", "DeadlockDetected"),

    // Class 42 - Syntax Error or Access Rule Violation
    ("42000", "SyntaxErrorOrAccessRuleViolation"),
    ("42501", "InsufficientPrivilege"),
    ("42601", "SyntaxError"),
    ("42602", "InvalidName"),
    ("42611", "InvalidColumnDefinition"),
    ("42622", "NameTooLong"),
    ("42701", "DuplicateColumn"),
    ("42702", "AmbiguousColumn"),
    ("42703", "UndefinedColumn"),
    ("42704", "UndefinedObject"),
    ("42710", "DuplicateObject"),
    ("42712", "DuplicateAlias"),
    ("42723", "DuplicateFunction"),
    ("42725", "AmbiguousFunction"),
    ("42803", "GroupingError"),
    ("42804", "DatatypeMismatch"),
    ("42809", "WrongObjectType"),
    ("42830", "InvalidForeignKey"),
    ("42846", "CannotCoerce"),
    ("42883", "UndefinedFunction"),
    ("42939", "ReservedName"),
    ("42P01", "UndefinedTable"),
    ("42P02", "UndefinedParameter"),
    ("42P03", "DuplicateCursor"),
    ("42P04", "DuplicateDatabase"),
    ("42P05", "DuplicatePreparedStatement"),
    ("42P06", "DuplicateSchema"),
    ("42P07", "DuplicateTable"),
    ("42P08", "AmbiguousParameter"),
    ("42P09", "AmbiguousAlias"),
    ("42P10", "InvalidColumnReference"),
    ("42P11", "InvalidCursorDefinition"),
    ("42P12", "InvalidDatabaseDefinition"),
    ("42P13", "InvalidFunctionDefinition"),
    ("42P14", "InvalidPreparedStatementDefinition"),
    ("42P15", "InvalidSchemaDefinition"),
    ("42P16", "InvalidTableDefinition"),
    ("42P17", "InvalidObjectDefinition"),
    ("42P18", "IndeterminateDatatype"),
    ("42P19", "InvalidRecursion"),
    ("42P20", "WindowingError"),
    ("42P21", "CollationMismatch"),
    ("42P22", "IndeterminateCollation"),

    // Class 44 - WITH CHECK OPTION Violation
    ("44000", "WithCheckOptionViolation"),

    // Class 53 - Insufficient Resources
    ("53000", "InsufficientResources"),
    ("53100", "DiskFull"),
    ("53200", "OutOfMemory"),
    ("53300", "TooManyConnections"),
    ("53400", "ConfigurationLimitExceeded"),

    // Class 54 - Program Limit Exceeded
    ("54000", "ProgramLimitExceeded"),
    ("54001", "StatementTooComplex"),
    ("54011", "TooManyColumns"),
    ("54023", "TooManyArguments"),

    // Class 55 - Object Not In Prerequisite State
    ("55000", "ObjectNotInPrerequisiteState"),
    ("55006", "ObjectInUse"),
    ("55P02", "CantChangeRuntimeParam"),
    ("55P03", "LockNotAvailable"),

    // Class 57 - Operator Intervention
    ("57000", "OperatorIntervention"),
    ("57014", "QueryCanceled"),
    ("57P01", "AdminShutdown"),
    ("57P02", "CrashShutdown"),
    ("57P03", "CannotConnectNow"),
    ("57P04", "DatabaseDropped"),

    // Class 58 - System Error (errors external to PostgreSQL itself)
    ("58000", "SystemError"),
    ("58030", "IoError"),
    ("58P01", "UndefinedFile"),
    ("58P02", "DuplicateFile"),

    // Class F0 - Configuration File Error
    ("F0000", "ConfigFileError"),
    ("F0001", "LockFileExists"),

    // Class HV - Foreign Data Wrapper Error (SQL/MED)
    ("HV000", "FdwError"),
    ("HV001", "FdwOutOfMemory"),
    ("HV002", "FdwDynamicParameterValueNeeded"),
    ("HV004", "FdwInvalidDataType"),
    ("HV005", "FdwColumnNameNotFound"),
    ("HV006", "FdwInvalidDataTypeDescriptors"),
    ("HV007", "FdwInvalidColumnName"),
    ("HV008", "FdwInvalidColumnNumber"),
    ("HV009", "FdwInvalidUseOfNullPointer"),
    ("HV00A", "FdwInvalidStringFormat"),
    ("HV00B", "FdwInvalidHandle"),
    ("HV00C", "FdwInvalidOptionIndex"),
    ("HV00D", "FdwInvalidOptionName"),
    ("HV00J", "FdwOptionNameNotFound"),
    ("HV00K", "FdwReplyHandle"),
    ("HV00L", "FdwUnableToCreateExecution"),
    ("HV00M", "FdwUnableToCreateReply"),
    ("HV00N", "FdwUnableToEstablishConnection"),
    ("HV00P", "FdwNoSchemas"),
    ("HV00Q", "FdwSchemaNotFound"),
    ("HV00R", "FdwTableNotFound"),
    ("HV010", "FdwFunctionSequenceError"),
    ("HV014", "FdwTooManyHandles"),
    ("HV021", "FdwInconsistentDescriptorInformation"),
    ("HV024", "FdwInvalidAttributeValue"),
    ("HV090", "FdwInvalidStringLengthOrBufferLength"),
    ("HV091", "FdwInvalidDescriptorFieldIdentifier"),

    // Class P0 - PL/pgSQL Error
    ("P0000", "PlpgsqlError"),
    ("P0001", "RaiseException"),
    ("P0002", "NoDataFound"),
    ("P0003", "TooManyRows"),

    // Class XX - Internal Error
    ("XX000", "InternalError"),
    ("XX001", "DataCorrupted"),
    ("XX002", "IndexCorrupted"),
];

/// Historical names bound to an existing code. They resolve to the same entry.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("UndefinedPstatement", "26000"),
    ("UndefinedCursor", "34000"),
    ("UndefinedDatabase", "3D000"),
    ("UndefinedSchema", "3F000"),
];

/// Codes whose category differs from the one of their class.
pub(crate) const CATEGORY_OVERRIDES: &[(&str, Category)] = &[("57014", Category::QueryCanceledError)];
