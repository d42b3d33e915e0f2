//! Node-compatible error kinds.
//!
//! # Taxonomy & Governance
//!
//! Every kind below is public contract: callers branch on `code`, never on
//! message text. A code is never reused for a different condition and never
//! renamed once shipped. New kinds are appended to the block of their family.
//!
//! Static templates use the printf placeholders of
//! [`format_template`](crate::format_template). Kinds whose wording depends on
//! argument shape point at a renderer in [`messages`](crate::messages).
//!
//! # Families
//!
//! - **Error**: plain faults (streams, sockets, workers, modules)
//! - **TypeError**: a value or option had the wrong type or form
//! - **RangeError**: a value was outside what the operation accepts
//! - **SyntaxError**: malformed manifests and integrity strings
//! - **URIError**: malformed URI components
//!
//! Kinds reported through [`system_error`](crate::system_error) carry only the
//! prefix of their message here; the errno context supplies the rest.

use crate::codes::{computed, text};
use crate::messages::templates;
use crate::ErrorKind;

crate::define_error_kinds! {
    // -------------------------------------------------------------------------
    // Error
    // -------------------------------------------------------------------------
    Error => {
        ERR_ASSERTION = text("%s"),
        ERR_BUFFER_CONTEXT_NOT_AVAILABLE = text("Buffer is not available for the current Context"),
        ERR_CANNOT_WATCH_SIGINT = text("Cannot watch for SIGINT signals"),
        ERR_CHILD_CLOSED_BEFORE_REPLY = text("Child closed before reply received"),
        ERR_CHILD_PROCESS_IPC_REQUIRED = text("Forked processes must have an IPC channel, missing value 'ipc' in %s"),
        ERR_CONTEXT_NOT_INITIALIZED = text("context used is not initialized"),
        ERR_CPU_USAGE = text("Unable to obtain cpu usage %s"),
        ERR_CRYPTO_CUSTOM_ENGINE_NOT_SUPPORTED = text("Custom engines not supported by this OpenSSL"),
        ERR_CRYPTO_ECDH_INVALID_PUBLIC_KEY = text("Public key is not valid for specified curve"),
        ERR_CRYPTO_ENGINE_UNKNOWN = text(r#"Engine "%s" was not found"#),
        ERR_CRYPTO_FIPS_FORCED = text("Cannot set FIPS mode, it was forced with --force-fips at startup."),
        ERR_CRYPTO_FIPS_UNAVAILABLE = text("Cannot set FIPS mode in a non-FIPS build."),
        ERR_CRYPTO_HASH_FINALIZED = text("Digest already called"),
        ERR_CRYPTO_HASH_UPDATE_FAILED = text("Hash update failed"),
        ERR_CRYPTO_INVALID_STATE = text("Invalid state for operation %s"),
        ERR_CRYPTO_PBKDF2_ERROR = text("PBKDF2 error"),
        ERR_CRYPTO_SCRYPT_NOT_SUPPORTED = text("Scrypt algorithm not supported"),
        ERR_CRYPTO_SIGN_KEY_REQUIRED = text("No key provided to sign"),
        ERR_CRYPTO_UNKNOWN_CIPHER = text("Unknown cipher"),
        ERR_CRYPTO_UNKNOWN_DH_GROUP = text("Unknown DH group"),
        ERR_DIR_CLOSED = text("Directory handle was closed"),
        ERR_DIR_CONCURRENT_OPERATION = text("Cannot do synchronous work on directory handle with concurrent asynchronous operations"),
        ERR_DNS_SET_SERVERS_FAILED = text(r#"c-ares failed to set servers: "%s" [%s]"#),
        ERR_DOMAIN_CALLBACK_NOT_AVAILABLE = text("A callback was registered through process.setUncaughtExceptionCaptureCallback(), which is mutually exclusive with using the `domain` module"),
        ERR_DOMAIN_CANNOT_SET_UNCAUGHT_EXCEPTION_CAPTURE = text("The `domain` module is in use, which is mutually exclusive with calling process.setUncaughtExceptionCaptureCallback()"),
        ERR_EVAL_ESM_CANNOT_PRINT = text("--print cannot be used with ESM input"),
        ERR_EVENT_RECURSION = text(r#"The event "%s" is already being dispatched"#),
        ERR_FALSY_VALUE_REJECTION = text("Promise was rejected with falsy value"),
        ERR_FS_INVALID_SYMLINK_TYPE = text(r#"Symlink type must be one of "dir", "file", or "junction". Received "%s""#),
        ERR_HTTP2_CONNECT_AUTHORITY = text(":authority header is required for CONNECT requests"),
        ERR_HTTP2_CONNECT_PATH = text("The :path header is forbidden for CONNECT requests"),
        ERR_HTTP2_CONNECT_SCHEME = text("The :scheme header is forbidden for CONNECT requests"),
        ERR_HTTP2_GOAWAY_SESSION = text("New streams cannot be created after receiving a GOAWAY"),
        ERR_HTTP2_HEADERS_AFTER_RESPOND = text("Cannot specify additional headers after response initiated"),
        ERR_HTTP2_HEADERS_SENT = text("Response has already been initiated."),
        ERR_HTTP2_INVALID_SESSION = text("The session has been destroyed"),
        ERR_HTTP2_INVALID_STREAM = text("The stream has been destroyed"),
        ERR_HTTP2_MAX_PENDING_SETTINGS_ACK = text("Maximum number of pending settings acknowledgements"),
        ERR_HTTP2_NESTED_PUSH = text("A push stream cannot initiate another push stream."),
        ERR_HTTP2_NO_SOCKET_MANIPULATION = text("HTTP/2 sockets should not be directly manipulated (e.g. read and written)"),
        ERR_HTTP2_OUT_OF_STREAMS = text("No stream ID is available because maximum stream ID has been reached"),
        ERR_HTTP2_PAYLOAD_FORBIDDEN = text("Responses with %s status must not have a payload"),
        ERR_HTTP2_PING_CANCEL = text("HTTP2 ping cancelled"),
        ERR_HTTP2_PUSH_DISABLED = text("HTTP/2 client has disabled push streams"),
        ERR_HTTP2_SEND_FILE = text("Directories cannot be sent"),
        ERR_HTTP2_SEND_FILE_NOSEEK = text("Offset or length can only be specified for regular files"),
        ERR_HTTP2_SESSION_ERROR = text("Session closed with error code %s"),
        ERR_HTTP2_SETTINGS_CANCEL = text("HTTP2 session settings canceled"),
        ERR_HTTP2_SOCKET_BOUND = text("The socket is already bound to an Http2Session"),
        ERR_HTTP2_SOCKET_UNBOUND = text("The socket has been disconnected from the Http2Session"),
        ERR_HTTP2_STATUS_101 = text("HTTP status code 101 (Switching Protocols) is forbidden in HTTP/2"),
        ERR_HTTP2_STREAM_CANCEL = computed(templates::http2_stream_cancel),
        ERR_HTTP2_STREAM_ERROR = text("Stream closed with error code %s"),
        ERR_HTTP2_STREAM_SELF_DEPENDENCY = text("A stream cannot depend on itself"),
        ERR_HTTP2_TRAILERS_ALREADY_SENT = text("Trailing headers have already been sent"),
        ERR_HTTP2_TRAILERS_NOT_READY = text("Trailing headers cannot be sent until after the wantTrailers event is emitted"),
        ERR_HTTP2_UNSUPPORTED_PROTOCOL = text(r#"protocol "%s" is unsupported."#),
        ERR_HTTP_HEADERS_SENT = text("Cannot %s headers after they are sent to the client"),
        ERR_HTTP_SOCKET_ENCODING = text("Changing the socket encoding is not allowed per RFC7230 Section 3."),
        ERR_HTTP_TRAILER_INVALID = text("Trailers are invalid with this transfer encoding"),
        ERR_INPUT_TYPE_NOT_ALLOWED = text("--input-type can only be used with string input via --eval, --print, or STDIN"),
        ERR_INSPECTOR_ALREADY_ACTIVATED = text("Inspector is already activated. Close it with inspector.close() before activating it again."),
        ERR_INSPECTOR_ALREADY_CONNECTED = text("%s is already connected"),
        ERR_INSPECTOR_CLOSED = text("Session was closed"),
        ERR_INSPECTOR_COMMAND = text("Inspector error %d: %s"),
        ERR_INSPECTOR_NOT_ACTIVE = text("Inspector is not active"),
        ERR_INSPECTOR_NOT_AVAILABLE = text("Inspector is not available"),
        ERR_INSPECTOR_NOT_CONNECTED = text("Session is not connected"),
        ERR_INSPECTOR_NOT_WORKER = text("Current thread is not a worker"),
        ERR_INTERNAL_ASSERTION = computed(templates::internal_assertion),
        ERR_INVALID_PACKAGE_CONFIG = computed(templates::invalid_package_config),
        ERR_INVALID_PERFORMANCE_MARK = text(r#"The "%s" performance mark has not been set"#),
        ERR_INVALID_STATE = text("Invalid state: %s"),
        ERR_IPC_CHANNEL_CLOSED = text("Channel closed"),
        ERR_IPC_DISCONNECTED = text("IPC channel is already disconnected"),
        ERR_IPC_ONE_PIPE = text("Child process can have only one IPC pipe"),
        ERR_IPC_SYNC_FORK = text("IPC cannot be used with synchronous forks"),
        ERR_MANIFEST_DEPENDENCY_MISSING = text("Manifest resource %s does not list %s as a dependency specifier"),
        ERR_MANIFEST_TDZ = text("Manifest initialization has not yet run"),
        ERR_MANIFEST_UNKNOWN_ONERROR = text(r#"Manifest specified unknown error behavior "%s"."#),
        ERR_METHOD_NOT_IMPLEMENTED = text("The %s method is not implemented"),
        ERR_MISSING_PLATFORM_FOR_WORKER = text("The V8 platform used by this instance of Node does not support creating Workers"),
        ERR_MODULE_NOT_FOUND = computed(templates::module_not_found),
        ERR_MULTIPLE_CALLBACK = text("Callback called multiple times"),
        ERR_NO_CRYPTO = text("Node.js is not compiled with OpenSSL crypto support"),
        ERR_OPERATION_FAILED = text("Operation failed: %s"),
        ERR_PROTO_ACCESS = text("Accessing Object.prototype.__proto__ has been disallowed with --disable-proto=throw"),
        ERR_QUICCLIENTSESSION_FAILED = text("Failed to create a new QuicClientSession: %s"),
        ERR_QUICCLIENTSESSION_FAILED_SETSOCKET = text("Failed to set the QuicSocket"),
        ERR_QUICSESSION_DESTROYED = text("Cannot call %s after a QuicSession has been destroyed"),
        ERR_QUICSESSION_INVALID_DCID = text("Invalid DCID value: %s"),
        ERR_QUICSESSION_UPDATEKEY = text("Unable to update QuicSession keys"),
        ERR_QUICSOCKET_DESTROYED = text("Cannot call %s after a QuicSocket has been destroyed"),
        ERR_QUICSOCKET_INVALID_STATELESS_RESET_SECRET_LENGTH = text("The stateResetToken must be exactly 16-bytes in length"),
        ERR_QUICSOCKET_LISTENING = text("This QuicSocket is already listening"),
        ERR_QUICSOCKET_UNBOUND = text("Cannot call %s before a QuicSocket has been bound"),
        ERR_QUICSTREAM_DESTROYED = text("Cannot call %s after a QuicStream has been destroyed"),
        ERR_QUICSTREAM_INVALID_PUSH = text("Push streams are only supported on client-initiated, bidirectional streams"),
        ERR_QUICSTREAM_OPEN_FAILED = text("Opening a new QuicStream failed"),
        ERR_QUICSTREAM_UNSUPPORTED_PUSH = text("Push streams are not supported on this QuicSession"),
        ERR_QUIC_TLS13_REQUIRED = text("QUIC requires TLS version 1.3"),
        ERR_REQUIRE_ESM = text("require() of ES Module %s not supported."),
        ERR_SCRIPT_EXECUTION_INTERRUPTED = text("Script execution was interrupted by `SIGINT`"),
        ERR_SERVER_ALREADY_LISTEN = text("Listen method has been called more than once without closing."),
        ERR_SERVER_NOT_RUNNING = text("Server is not running."),
        ERR_SOCKET_ALREADY_BOUND = text("Socket is already bound"),
        ERR_SOCKET_BUFFER_SIZE = text("Could not get or set buffer size"),
        ERR_SOCKET_CLOSED = text("Socket is closed"),
        ERR_SOCKET_DGRAM_IS_CONNECTED = text("Already connected"),
        ERR_SOCKET_DGRAM_NOT_CONNECTED = text("Not connected"),
        ERR_SOCKET_DGRAM_NOT_RUNNING = text("Not running"),
        ERR_STREAM_ALREADY_FINISHED = text("Cannot call %s after a stream was finished"),
        ERR_STREAM_CANNOT_PIPE = text("Cannot pipe, not readable"),
        ERR_STREAM_DESTROYED = text("Cannot call %s after a stream was destroyed"),
        ERR_STREAM_PREMATURE_CLOSE = text("Premature close"),
        ERR_STREAM_PUSH_AFTER_EOF = text("stream.push() after EOF"),
        ERR_STREAM_UNSHIFT_AFTER_END_EVENT = text("stream.unshift() after end event"),
        ERR_STREAM_WRAP = text("Stream has StringDecoder set or is in objectMode"),
        ERR_STREAM_WRITE_AFTER_END = text("write after end"),
        ERR_SYNTHETIC = text("JavaScript Callstack"),
        ERR_SYSTEM_ERROR = text("A system error occurred"),
        ERR_TLS_CERT_ALTNAME_INVALID = computed(templates::tls_cert_altname_invalid)
            => [reason = 0, host = 1, cert = 2],
        ERR_TLS_DH_PARAM_SIZE = text("DH parameter size %s is less than 2048"),
        ERR_TLS_HANDSHAKE_TIMEOUT = text("TLS handshake timeout"),
        ERR_TLS_INVALID_STATE = text("TLS socket connection must be securely established"),
        ERR_TLS_RENEGOTIATION_DISABLED = text("TLS session renegotiation disabled for this socket"),
        ERR_TLS_REQUIRED_SERVER_NAME = text(r#""servername" is required parameter for Server.addContext"#),
        ERR_TLS_SESSION_ATTACK = text("TLS session renegotiation attack detected"),
        ERR_TLS_SNI_FROM_SERVER = text("Cannot issue SNI from a TLS server-side socket"),
        ERR_TRACE_EVENTS_UNAVAILABLE = text("Trace events are unavailable"),
        ERR_TTY_INIT_FAILED = text("TTY initialization failed"),
        ERR_UNAVAILABLE_DURING_EXIT = text("Cannot call function in process exit handler"),
        ERR_UNCAUGHT_EXCEPTION_CAPTURE_ALREADY_SET = text("`process.setupUncaughtExceptionCapture()` was called while a capture callback was already active"),
        ERR_UNHANDLED_ERROR = computed(templates::unhandled_error),
        ERR_UNKNOWN_BUILTIN_MODULE = text("No such built-in module: %s"),
        ERR_UNKNOWN_CREDENTIAL = text("%s identifier does not exist: %s"),
        ERR_UNSUPPORTED_DIR_IMPORT = text("Directory import '%s' is not supported resolving ES modules, imported from %s"),
        ERR_UNSUPPORTED_ESM_URL_SCHEME = computed(templates::unsupported_esm_url_scheme),
        ERR_V8BREAKITERATOR = text("Full ICU data not installed. See https://github.com/nodejs/node/wiki/Intl"),
        ERR_VALID_PERFORMANCE_ENTRY_TYPE = text("At least one valid performance entry type is required"),
        ERR_VM_MODULE_ALREADY_LINKED = text("Module has already been linked"),
        ERR_VM_MODULE_CANNOT_CREATE_CACHED_DATA = text("Cached data cannot be created for a module which has been evaluated"),
        ERR_VM_MODULE_DIFFERENT_CONTEXT = text("Linked modules must use the same context"),
        ERR_VM_MODULE_LINKING_ERRORED = text("Linking has already failed for the provided module"),
        ERR_VM_MODULE_NOT_MODULE = text("Provided module is not an instance of Module"),
        ERR_VM_MODULE_STATUS = text("Module status %s"),
        ERR_WASI_ALREADY_STARTED = text("WASI instance has already started"),
        ERR_WORKER_INIT_FAILED = text("Worker initialization failure: %s"),
        ERR_WORKER_NOT_RUNNING = text("Worker instance not running"),
        ERR_WORKER_OUT_OF_MEMORY = text("Worker terminated due to reaching memory limit: %s"),
        ERR_WORKER_UNSERIALIZABLE_ERROR = text("Serializing an uncaught exception failed"),
        ERR_ZLIB_INITIALIZATION_FAILED = text("Initialization failed"),
    }

    // -------------------------------------------------------------------------
    // TypeError
    // -------------------------------------------------------------------------
    TypeError => {
        ERR_AMBIGUOUS_ARGUMENT = text(r#"The "%s" argument is ambiguous. %s"#),
        ERR_ARG_NOT_ITERABLE = text("%s must be iterable"),
        ERR_ASYNC_CALLBACK = text("%s must be a function"),
        ERR_ASYNC_TYPE = text(r#"Invalid name for async "type": %s"#),
        ERR_CONSOLE_WRITABLE_STREAM = text("Console expects a writable stream instance for %s"),
        ERR_CRYPTO_INCOMPATIBLE_KEY = text("Incompatible %s: %s"),
        ERR_CRYPTO_INCOMPATIBLE_KEY_OPTIONS = text("The selected key encoding %s %s."),
        ERR_CRYPTO_INVALID_DIGEST = text("Invalid digest: %s"),
        ERR_CRYPTO_INVALID_KEY_OBJECT_TYPE = text("Invalid key object type %s, expected %s."),
        ERR_ENCODING_INVALID_ENCODED_DATA = text("The encoded data was not valid for encoding %s"),
        ERR_FEATURE_UNAVAILABLE_ON_PLATFORM = text("The feature %s is unavailable on the current platform, which is being used to run Node.js"),
        ERR_HTTP2_ALTSVC_INVALID_ORIGIN = text("HTTP/2 ALTSVC frames require a valid origin"),
        ERR_HTTP2_ALTSVC_LENGTH = text("HTTP/2 ALTSVC frames are limited to 16382 bytes"),
        ERR_HTTP2_HEADER_SINGLE_VALUE = text(r#"Header field "%s" must only have a single value"#),
        ERR_HTTP2_INVALID_CONNECTION_HEADERS = text(r#"HTTP/1 Connection specific headers are forbidden: "%s""#),
        ERR_HTTP2_INVALID_HEADER_VALUE = text(r#"Invalid value "%s" for header "%s""#),
        ERR_HTTP2_INVALID_ORIGIN = text("HTTP/2 ORIGIN frames require a valid origin"),
        ERR_HTTP2_INVALID_PSEUDOHEADER = text(r#""%s" is an invalid pseudoheader or is used incorrectly"#),
        ERR_HTTP2_ORIGIN_LENGTH = text("HTTP/2 ORIGIN frames are limited to 16382 bytes"),
        ERR_HTTP2_PSEUDOHEADER_NOT_ALLOWED = text("Cannot set HTTP/2 pseudo-headers"),
        ERR_HTTP_INVALID_HEADER_VALUE = text(r#"Invalid value "%s" for header "%s""#),
        ERR_IMPORT_ASSERTION_TYPE_FAILED = text(r#"Module "%s" is not of type "%s""#),
        ERR_IMPORT_ASSERTION_TYPE_MISSING = text(r#"Module "%s" needs an import assertion of type "%s""#),
        ERR_IMPORT_ASSERTION_TYPE_UNSUPPORTED = text(r#"Import assertion type "%s" is unsupported"#),
        ERR_INCOMPATIBLE_OPTION_PAIR = text(r#"Option "%s" cannot be used in combination with option "%s""#),
        ERR_INVALID_ARG_TYPE = computed(templates::invalid_arg_type) => [actual = 2],
        ERR_INVALID_ARG_VALUE = computed(templates::invalid_arg_value) => [value = 1],
        ERR_INVALID_CHAR = computed(templates::invalid_char),
        ERR_INVALID_CURSOR_POS = text("Cannot set cursor row without setting its column"),
        ERR_INVALID_FD_TYPE = text("Unsupported fd type: %s"),
        ERR_INVALID_FILE_URL_HOST = text(r#"File URL host must be "localhost" or empty on %s"#),
        ERR_INVALID_FILE_URL_PATH = text("File URL path %s"),
        ERR_INVALID_HANDLE_TYPE = text("This handle type cannot be sent"),
        ERR_INVALID_HTTP_TOKEN = text(r#"%s must be a valid HTTP token ["%s"]"#),
        ERR_INVALID_IP_ADDRESS = text("Invalid IP address: %s"),
        ERR_INVALID_MODULE_SPECIFIER = computed(templates::invalid_module_specifier),
        ERR_INVALID_OPT_VALUE = text(r#"The value "%s" is invalid for option "%s""#),
        ERR_INVALID_OPT_VALUE_ENCODING = text(r#"The value "%s" is invalid for option "encoding""#),
        ERR_INVALID_PROTOCOL = text(r#"Protocol "%s" not supported. Expected "%s""#),
        ERR_INVALID_REPL_EVAL_CONFIG = text(r#"Cannot specify both "breakEvalOnSigint" and "eval" for REPL"#),
        ERR_INVALID_REPL_INPUT = text("%s"),
        ERR_INVALID_RETURN_PROPERTY = computed(templates::invalid_return_property),
        ERR_INVALID_RETURN_PROPERTY_VALUE = computed(templates::invalid_return_property_value),
        ERR_INVALID_RETURN_VALUE = computed(templates::invalid_return_value),
        ERR_INVALID_SYNC_FORK_INPUT = text("Asynchronous forks do not support Buffer, TypedArray, DataView or string input: %s"),
        ERR_INVALID_THIS = text(r#"Value of "this" must be of type %s"#),
        ERR_INVALID_TUPLE = text("%s must be an iterable %s tuple"),
        ERR_INVALID_URL = computed(templates::invalid_url) => [input = 0, base = 1],
        ERR_INVALID_URL_SCHEME = computed(templates::invalid_url_scheme),
        ERR_MANIFEST_INVALID_RESOURCE_FIELD = text("Manifest resource %s has invalid property value for %s"),
        ERR_MISSING_ARGS = computed(templates::missing_args),
        ERR_MISSING_OPTION = text("%s is required"),
        ERR_MISSING_PASSPHRASE = text("%s"),
        ERR_NAPI_CONS_FUNCTION = text("Constructor must be a function"),
        ERR_NO_ICU = text(r#""%s" feature requires Node.js to be compiled with ICU support"#),
        ERR_PARSE_ARGS_INVALID_OPTION_VALUE = text("%s"),
        ERR_PARSE_ARGS_UNEXPECTED_POSITIONAL = text("Unexpected argument '%s'. This command does not take positional arguments"),
        ERR_PARSE_ARGS_UNKNOWN_OPTION = computed(templates::parse_args_unknown_option),
        ERR_SOCKET_BAD_BUFFER_SIZE = text("Buffer size must be a positive integer"),
        ERR_SOCKET_BAD_TYPE = text("Bad socket type specified. Valid types are: udp4, udp6"),
        ERR_STREAM_NULL_VALUES = text("May not write null values to stream"),
        ERR_TLS_INVALID_CONTEXT = text("%s must be a SecureContext"),
        ERR_TLS_INVALID_PROTOCOL_VERSION = text("%j is not a valid %s TLS protocol version"),
        ERR_TLS_PROTOCOL_VERSION_CONFLICT = text("TLS protocol version %j conflicts with secureProtocol %j"),
        ERR_TRACE_EVENTS_CATEGORY_REQUIRED = text("At least one category is required"),
        ERR_UNESCAPED_CHARACTERS = text("%s contains unescaped characters"),
        ERR_UNKNOWN_ENCODING = text("Unknown encoding: %s"),
        ERR_UNKNOWN_FILE_EXTENSION = text(r#"Unknown file extension "%s" for %s"#),
        ERR_UNKNOWN_SIGNAL = text("Unknown signal: %s"),
        ERR_VM_DYNAMIC_IMPORT_CALLBACK_MISSING = text("A dynamic import callback was not specified."),
        ERR_WORKER_UNSUPPORTED_EXTENSION = text(r#"The worker script extension must be ".js", ".mjs", or ".cjs". Received "%s""#),
        ERR_WORKER_UNSUPPORTED_OPERATION = text("%s is not supported in workers"),
    }

    // -------------------------------------------------------------------------
    // RangeError
    // -------------------------------------------------------------------------
    RangeError => {
        ERR_BROTLI_INVALID_PARAM = text("%s is not a valid Brotli parameter"),
        ERR_BUFFER_OUT_OF_BOUNDS = computed(templates::buffer_out_of_bounds),
        ERR_BUFFER_TOO_LARGE = text("Cannot create a Buffer larger than %s bytes"),
        ERR_CHILD_PROCESS_STDIO_MAXBUFFER = text("%s maxBuffer length exceeded"),
        ERR_CRYPTO_INVALID_KEYLEN = text("Invalid key length"),
        ERR_CRYPTO_INVALID_SCRYPT_PARAMS = text("Invalid scrypt parameter"),
        ERR_CRYPTO_TIMING_SAFE_EQUAL_LENGTH = text("Input buffers must have the same byte length"),
        ERR_ENCODING_NOT_SUPPORTED = text(r#"The "%s" encoding is not supported"#),
        ERR_FS_FILE_TOO_LARGE = text("File size (%s) is greater than 2 GB"),
        ERR_HTTP2_INFO_STATUS_NOT_ALLOWED = text("Informational status codes cannot be used"),
        ERR_HTTP2_INVALID_INFO_STATUS = text("Invalid informational status code: %s"),
        ERR_HTTP2_INVALID_PACKED_SETTINGS_LENGTH = text("Packed settings length must be a multiple of six"),
        ERR_HTTP2_INVALID_SETTING_VALUE = computed(templates::http2_invalid_setting_value)
            => [actual = 1, min = 2, max = 3],
        ERR_HTTP2_PING_LENGTH = text("HTTP2 ping payload must be 8 bytes"),
        ERR_HTTP2_STATUS_INVALID = text("Invalid status code: %s"),
        ERR_HTTP_INVALID_STATUS_CODE = text("Invalid status code: %s"),
        ERR_INVALID_ADDRESS_FAMILY = computed(templates::invalid_address_family)
            => [host = 1, port = 2],
        ERR_INVALID_ARG_TYPE_RANGE = computed(templates::invalid_arg_type),
        ERR_INVALID_ARG_VALUE_RANGE = computed(templates::invalid_arg_value),
        ERR_INVALID_ASYNC_ID = text("Invalid %s value: %s"),
        ERR_INVALID_BUFFER_SIZE = text("Buffer size must be a multiple of %s"),
        ERR_INVALID_FD = text(r#""fd" must be a positive integer: %s"#),
        ERR_NAPI_INVALID_DATAVIEW_ARGS = text("byte_offset + byte_length should be less than or equal to the size in bytes of the array passed in"),
        ERR_NAPI_INVALID_TYPEDARRAY_ALIGNMENT = text("start offset of %s should be a multiple of %s"),
        ERR_NAPI_INVALID_TYPEDARRAY_LENGTH = text("Invalid typed array length"),
        ERR_OUT_OF_RANGE = computed(templates::out_of_range) => [received = 2, range = 1],
        ERR_SOCKET_BAD_PORT = computed(templates::socket_bad_port) => [port = 1],
        ERR_STRING_TOO_LONG = text("Cannot create a string longer than 0x%s characters"),
        ERR_UNKNOWN_MODULE_FORMAT = text("Unknown module format: %s"),
    }

    // -------------------------------------------------------------------------
    // SyntaxError
    // -------------------------------------------------------------------------
    SyntaxError => {
        ERR_MANIFEST_INTEGRITY_MISMATCH = text("Manifest resource %s has multiple entries but integrity lists do not match"),
        ERR_SRI_PARSE = computed(templates::sri_parse),
    }

    // -------------------------------------------------------------------------
    // URIError
    // -------------------------------------------------------------------------
    URIError => {
        ERR_INVALID_URI = text("URI malformed"),
    }
}

/// Look up a kind by its code.
///
/// ```rust
/// use node_compat_errors::{find, ErrorFamily};
///
/// let kind = find("ERR_OUT_OF_RANGE").unwrap();
/// assert_eq!(kind.family(), ErrorFamily::RangeError);
/// assert!(find("ERR_NOT_A_THING").is_none());
/// ```
pub fn find(code: &str) -> Option<&'static ErrorKind> {
    ALL.iter().copied().find(|kind| kind.code() == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorFamily;
    use std::collections::HashSet;

    /// Codes are public contract; a duplicate would make two conditions
    /// indistinguishable to callers.
    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for kind in ALL {
            assert!(seen.insert(kind.code()), "duplicate code {}", kind.code());
        }
        assert!(ALL.len() > 150);
    }

    #[test]
    fn codes_follow_naming_convention() {
        for kind in ALL {
            assert!(kind.code().starts_with("ERR_"));
            assert!(
                kind.code()
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "{} is not SCREAMING_SNAKE_CASE",
                kind.code()
            );
        }
    }

    #[test]
    fn static_templates_are_non_empty() {
        for kind in ALL {
            if let Some(template) = kind.template().as_text() {
                assert!(!template.trim().is_empty(), "{} has a blank template", kind.code());
            }
        }
    }

    #[test]
    fn every_family_is_populated() {
        for family in ErrorFamily::ALL {
            assert!(ALL.iter().any(|k| k.family() == family), "no kinds for {}", family);
        }
    }

    #[test]
    fn validate_family_assignments() {
        assert_eq!(ERR_INVALID_ARG_TYPE.family(), ErrorFamily::TypeError);
        assert_eq!(ERR_OUT_OF_RANGE.family(), ErrorFamily::RangeError);
        assert_eq!(ERR_SOCKET_BAD_PORT.family(), ErrorFamily::RangeError);
        assert_eq!(ERR_SRI_PARSE.family(), ErrorFamily::SyntaxError);
        assert_eq!(ERR_INVALID_URI.family(), ErrorFamily::URIError);
        assert_eq!(ERR_STREAM_PREMATURE_CLOSE.family(), ErrorFamily::Error);
    }

    #[test]
    fn field_slots_are_distinct() {
        for kind in ALL {
            let names: HashSet<_> = kind.fields().iter().map(|(name, _)| *name).collect();
            let positions: HashSet<_> = kind.fields().iter().map(|(_, pos)| *pos).collect();
            assert_eq!(names.len(), kind.fields().len(), "{} repeats a field name", kind.code());
            assert_eq!(positions.len(), kind.fields().len(), "{} reuses an argument", kind.code());
        }
        assert_eq!(ERR_OUT_OF_RANGE.fields(), &[("received", 2usize), ("range", 1usize)]);
        assert!(ERR_STREAM_PREMATURE_CLOSE.fields().is_empty());
    }

    #[test]
    fn find_round_trips_every_kind() {
        for kind in ALL {
            assert!(std::ptr::eq(find(kind.code()).unwrap(), *kind));
        }
    }

    #[test]
    fn every_kind_renders_without_arguments() {
        for kind in ALL {
            assert!(!kind.render(&[]).is_empty(), "{} rendered empty", kind.code());
        }
    }
}
