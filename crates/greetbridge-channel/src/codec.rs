// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON wire codec for the channel.
//
// Requests and responses travel as UTF-8 JSON.  The envelope shapes are part
// of the wire contract and are pinned by the tests below:
//
//   request:  {"method": "sayHi", "arguments": {"name": "Alice"}}
//   success:  {"status": "success", "payload": "Hi Alice!"}
//   failure:  {"status": "error", "code": "...", "message": "..."}
//   unknown:  {"status": "notImplemented"}

use greetbridge_core::{Request, Response, Result};

/// Decode a request off the wire.
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a request for the wire.
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(request)?)
}

/// Decode a reply envelope off the wire.
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a reply envelope for the wire.
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greetbridge_core::{BridgeError, MethodName};

    #[test]
    fn request_decodes_from_documented_shape() {
        let bytes = br#"{"method": "sayHi", "arguments": {"name": "Alice"}}"#;
        let request = decode_request(bytes).expect("decode");
        assert_eq!(request.method, "sayHi");
        assert_eq!(request.required_str("name"), Some("Alice"));
    }

    #[test]
    fn malformed_request_is_a_codec_error() {
        let result = decode_request(b"{not json");
        assert!(matches!(result, Err(BridgeError::Codec(_))));
    }

    #[test]
    fn response_encodes_to_documented_shapes() {
        let success = encode_response(&Response::success("Hi Alice!")).expect("encode");
        assert_eq!(
            success,
            br#"{"status":"success","payload":"Hi Alice!"}"#.to_vec()
        );

        let failure =
            encode_response(&Response::native_failure(MethodName::SayHi, "boom")).expect("encode");
        assert_eq!(
            failure,
            br#"{"status":"error","code":"SAY_HI_FAILED","message":"boom"}"#.to_vec()
        );

        let not_implemented = encode_response(&Response::NotImplemented).expect("encode");
        assert_eq!(not_implemented, br#"{"status":"notImplemented"}"#.to_vec());
    }

    #[test]
    fn failure_without_message_round_trips() {
        let bytes = encode_response(&Response::bad_arguments()).expect("encode");
        let decoded = decode_response(&bytes).expect("decode");
        assert_eq!(decoded, Response::bad_arguments());
    }
}
