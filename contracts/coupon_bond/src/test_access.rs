//! Initialization and capability tests.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{CouponBond, CouponBondClient, Error, Role};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_initialize_grants_both_capabilities() {
    let e = Env::default();
    let (client, admin, issuer, buyer, _token, _cid) = setup(&e);

    assert!(client.has_role(&admin, &Role::Admin));
    assert!(client.has_role(&issuer, &Role::Issuer));
    assert!(!client.has_role(&buyer, &Role::Issuer));
    assert!(!client.has_role(&issuer, &Role::Admin));
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let (client, admin, issuer, _buyer, token, _cid) = setup(&e);
    assert_eq!(
        client.try_initialize(&admin, &issuer, &token, &admin),
        Err(Ok(Error::AlreadyInitialized.into()))
    );
}

#[test]
fn test_queries_before_initialize_fail() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(CouponBond, ());
    let client = CouponBondClient::new(&e, &contract_id);

    assert_eq!(client.try_get_treasury(), Err(Ok(Error::NotInitialized.into())));
}

#[test]
fn test_granted_issuer_can_issue() {
    let e = Env::default();
    let (client, admin, _issuer, _buyer, _token, _cid) = setup(&e);

    let second_issuer = Address::generate(&e);
    client.grant_role(&admin, &second_issuer, &Role::Issuer);
    let bond_id = client.issue_bond(&second_issuer, &default_spec());
    assert_eq!(bond_id, 0);
}

#[test]
fn test_revoked_issuer_cannot_issue() {
    let e = Env::default();
    let (client, admin, issuer, _buyer, _token, _cid) = setup(&e);

    client.revoke_role(&admin, &issuer, &Role::Issuer);
    assert_eq!(
        client.try_issue_bond(&issuer, &default_spec()),
        Err(Ok(Error::Unauthorized.into()))
    );
}

#[test]
fn test_grant_role_requires_admin_capability() {
    let e = Env::default();
    let (client, _admin, issuer, buyer, _token, _cid) = setup(&e);
    assert_eq!(
        client.try_grant_role(&issuer, &buyer, &Role::Issuer),
        Err(Ok(Error::Unauthorized.into()))
    );
}

#[test]
fn test_revoke_role_requires_admin_capability() {
    let e = Env::default();
    let (client, _admin, issuer, buyer, _token, _cid) = setup(&e);
    assert_eq!(
        client.try_revoke_role(&buyer, &issuer, &Role::Issuer),
        Err(Ok(Error::Unauthorized.into()))
    );
}

#[test]
fn test_address_may_hold_both_capabilities() {
    let e = Env::default();
    let (client, admin, _issuer, _buyer, _token, _cid) = setup(&e);

    client.grant_role(&admin, &admin, &Role::Issuer);
    let bond_id = client.issue_bond(&admin, &default_spec());
    client.set_supply(&admin, &bond_id, &3);
    assert_eq!(client.get_bond(&bond_id).supply, 3);
}
