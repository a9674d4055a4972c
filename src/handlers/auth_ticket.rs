use crate::error::{CannotParseResponse, Result, SpamExpertsError};
use crate::models::{ApiResponse, TicketDebug};

const TICKET_LEN: usize = 40;

/// Extracts an auth ticket from an `authticket/create` API response.
///
/// Any lower-level parse failure (bad status, recognized error text in the
/// body) is re-wrapped as a `MissingAuthTicket` error whose debug payload
/// records the ticket as absent. A body that parses but is not a
/// well-formed ticket yields `MissingAuthTicket` carrying the offending
/// candidate value instead.
pub fn extract_ticket(response: &ApiResponse) -> Result<String> {
    let ticket = match parse_candidate(response) {
        Ok(candidate) => candidate,
        Err(CannotParseResponse(message)) => {
            return Err(SpamExpertsError::MissingAuthTicket {
                message,
                debug: TicketDebug {
                    http_code: response.status,
                    content_type: response.content_type.clone(),
                    body: response.body.clone(),
                    // No candidate exists at this point.
                    ticket: None,
                },
            });
        }
    };

    if !is_valid_ticket(&ticket) {
        return Err(SpamExpertsError::MissingAuthTicket {
            message: "Unable to parse valid auth ticket from service response".to_string(),
            debug: TicketDebug {
                http_code: response.status,
                content_type: response.content_type.clone(),
                body: response.body.clone(),
                ticket: Some(ticket),
            },
        });
    }

    Ok(ticket)
}

/// Checks the response for failure and returns the raw body as the
/// ticket candidate.
fn parse_candidate(response: &ApiResponse) -> std::result::Result<String, CannotParseResponse> {
    assert_success(response)?;

    Ok(response.body.clone())
}

/// Asserts the ticket request was accepted by the panel.
///
/// SpamExperts reports failures as plain-text bodies starting with
/// "error:" under a 200 status, so the body is inspected even when the
/// transport-level status is fine.
fn assert_success(response: &ApiResponse) -> std::result::Result<(), CannotParseResponse> {
    if !(200..300).contains(&response.status) {
        return Err(CannotParseResponse(
            "Failed to get domain name auth ticket".to_string(),
        ));
    }

    let body = response.body.to_lowercase();

    // If no error in the body string, return without failure.
    if !body.starts_with("error:") {
        return Ok(());
    }

    // Known error cases first, most specific message wins.
    if body.contains("domain") && body.contains("not registered") {
        return Err(CannotParseResponse("Domain name doesn't exist".to_string()));
    }

    if body.contains("no valid user") {
        return Err(CannotParseResponse(
            "Service account doesn't exist".to_string(),
        ));
    }

    Err(CannotParseResponse(
        "Failed to get domain name auth ticket".to_string(),
    ))
}

/// Determine whether the given auth ticket is valid: exactly 40
/// hexadecimal characters.
pub fn is_valid_ticket(ticket: &str) -> bool {
    ticket.len() == TICKET_LEN && ticket.bytes().all(|b| b.is_ascii_hexdigit())
}
