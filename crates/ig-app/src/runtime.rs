//! Event loop that owns the session and serialises everything onto it.

use ig_core::ports::TimerEvent;
use ig_core::space::SpaceSettings;
use ig_core::SpaceId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::session::{EntryRequestStatus, EvictionNotice, IglooSession};
use crate::store::SpaceStore;

/// Host requests routed through the runtime loop.
#[derive(Debug)]
pub enum SessionCommand {
    Refresh,
    RefreshIdentity,
    RequestEntry {
        space_id: SpaceId,
        granted: oneshot::Sender<SpaceId>,
    },
    EnterSpace {
        space_id: SpaceId,
        evictions: mpsc::UnboundedSender<EvictionNotice>,
    },
    LeaveSpace,
    RequestRentQuote { space_id: SpaceId },
    RentSpace { space_id: SpaceId },
    UpdateSettings {
        space_id: SpaceId,
        settings: SpaceSettings,
    },
    SubmitRentPayment { space_id: SpaceId, proof: String },
    PayRent { space_id: SpaceId },
    SubmitEntryFeePayment { space_id: SpaceId, proof: String },
    PayEntryFee { space_id: SpaceId },
    RequestOwnerInfo { space_id: SpaceId },
    Snapshot { reply: oneshot::Sender<SpaceStore> },
    Shutdown,
}

pub struct SessionRuntime {
    session: IglooSession,
    inbound_rx: mpsc::Receiver<String>,
    timer_rx: mpsc::Receiver<TimerEvent>,
    command_rx: mpsc::Receiver<SessionCommand>,
}

impl SessionRuntime {
    pub fn new(
        session: IglooSession,
        inbound_rx: mpsc::Receiver<String>,
        timer_rx: mpsc::Receiver<TimerEvent>,
        command_rx: mpsc::Receiver<SessionCommand>,
    ) -> Self {
        Self {
            session,
            inbound_rx,
            timer_rx,
            command_rx,
        }
    }

    /// Run until shutdown is requested, the command side goes away or the
    /// inbound stream ends. Returns the session after it has been shut down.
    pub async fn run(mut self) -> IglooSession {
        info!("igloo session runtime started");

        loop {
            tokio::select! {
                raw = self.inbound_rx.recv() => match raw {
                    Some(raw) => self.session.handle_inbound(&raw).await,
                    None => {
                        info!("inbound stream ended");
                        break;
                    }
                },
                Some(event) = self.timer_rx.recv() => {
                    self.session.on_timer_event(event).await;
                }
                command = self.command_rx.recv() => match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command).await,
                },
            }
        }

        self.session.shutdown().await;
        self.session
    }

    async fn handle_command(&mut self, command: SessionCommand) {
        let result = match command {
            SessionCommand::Refresh => self.session.refresh().await,
            SessionCommand::RefreshIdentity => {
                self.session.refresh_identity().await;
                Ok(())
            }
            SessionCommand::RequestEntry { space_id, granted } => {
                let status = self
                    .session
                    .request_entry(space_id, move |space_id| {
                        let _ = granted.send(space_id);
                    })
                    .await;
                if status == EntryRequestStatus::GrantedOffline {
                    debug!("entry granted without a server check");
                }
                Ok(())
            }
            SessionCommand::EnterSpace {
                space_id,
                evictions,
            } => self
                .session
                .enter_space(space_id, move |notice| {
                    let _ = evictions.send(notice);
                })
                .await
                .map(|_| ()),
            SessionCommand::LeaveSpace => {
                self.session.disarm().await;
                Ok(())
            }
            SessionCommand::RequestRentQuote { space_id } => {
                self.session.request_rent_quote(space_id).await
            }
            SessionCommand::RentSpace { space_id } => self.session.rent_space(space_id).await,
            SessionCommand::UpdateSettings { space_id, settings } => {
                self.session.update_settings(space_id, settings).await
            }
            SessionCommand::SubmitRentPayment { space_id, proof } => {
                self.session.submit_rent_payment(space_id, proof).await
            }
            SessionCommand::PayRent { space_id } => self.session.pay_rent(space_id).await,
            SessionCommand::SubmitEntryFeePayment { space_id, proof } => {
                self.session.submit_entry_fee_payment(space_id, proof).await
            }
            SessionCommand::PayEntryFee { space_id } => self.session.pay_entry_fee(space_id).await,
            SessionCommand::RequestOwnerInfo { space_id } => {
                self.session.request_owner_info(space_id).await
            }
            SessionCommand::Snapshot { reply } => {
                let _ = reply.send(self.session.store().clone());
                Ok(())
            }
            SessionCommand::Shutdown => Ok(()),
        };

        if let Err(err) = result {
            warn!(error = %err, "session command failed");
        }
    }
}

/// Cloneable sender side for hosts.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    pub fn new(command_tx: mpsc::Sender<SessionCommand>) -> Self {
        Self { command_tx }
    }

    pub async fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| SessionError::RuntimeClosed)
    }

    /// Resolves with the space id once entry is granted. The receiver errors
    /// if the request is superseded, denied or abandoned.
    pub async fn request_entry(
        &self,
        space_id: SpaceId,
    ) -> Result<oneshot::Receiver<SpaceId>, SessionError> {
        let (granted, rx) = oneshot::channel();
        self.send(SessionCommand::RequestEntry { space_id, granted })
            .await?;
        Ok(rx)
    }

    pub async fn enter_space(
        &self,
        space_id: SpaceId,
    ) -> Result<mpsc::UnboundedReceiver<EvictionNotice>, SessionError> {
        let (evictions, rx) = mpsc::unbounded_channel();
        self.send(SessionCommand::EnterSpace { space_id, evictions })
            .await?;
        Ok(rx)
    }

    pub async fn snapshot(&self) -> Result<SpaceStore, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| SessionError::RuntimeClosed)
    }

    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Shutdown).await
    }
}
